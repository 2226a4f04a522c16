//! Restaurant records shipped with the crate.
//!
//! Records are listed in catalog order. IDs are stable and must stay unique.

use crate::domain::{
    Contact, Coordinates, DailyHours, HoursOfOperation, Location, Photos, PriceRange, Restaurant,
    RestaurantId, Services, Weekday,
};

pub(super) fn restaurants() -> Vec<Restaurant> {
    vec![
        bfc_dhanmondi(),
        chillox_dhanmondi(),
        dhaba_express(),
        fakruddin_biryani(),
        gloria_jeans(),
        haji_biriyani(),
        izumi_gulshan(),
        kacchi_bhai(),
        khazana_gulshan(),
        mezban_uttara(),
        north_end_coffee(),
        panshi_restaurant(),
        pizza_burg(),
        spaghetti_jazz(),
        star_kabab(),
        the_atrium(),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

fn location(
    address: &str,
    area: &str,
    latitude: f64,
    longitude: f64,
    landmarks: &[&str],
) -> Location {
    Location {
        address: address.to_string(),
        area: area.to_string(),
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        landmarks: strings(landmarks),
    }
}

fn contact(phone: &str, email: Option<&str>, website: Option<&str>) -> Contact {
    Contact {
        phone: phone.to_string(),
        email: email.map(str::to_string),
        website: website.map(str::to_string),
    }
}

fn photos(id: &str, interior: usize, dishes: usize) -> Photos {
    Photos {
        exterior: format!("/images/restaurants/{id}/exterior.jpg"),
        interior: (1..=interior)
            .map(|n| format!("/images/restaurants/{id}/interior-{n}.jpg"))
            .collect(),
        dishes: (1..=dishes)
            .map(|n| format!("/images/restaurants/{id}/dish-{n}.jpg"))
            .collect(),
    }
}

fn services(delivery: bool, takeout: bool, dine_in: bool, reservations: bool) -> Services {
    Services {
        delivery,
        takeout,
        dine_in,
        reservations,
    }
}

fn bfc_dhanmondi() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("bfc-dhanmondi"),
        name: "BFC Dhanmondi".to_string(),
        cuisine_type: strings(&["Fast Food", "Fried Chicken"]),
        price_range: PriceRange::Moderate,
        location: location(
            "House 54, Road 27 (Old), Dhanmondi, Dhaka 1209",
            "Dhanmondi",
            23.7465,
            90.3760,
            &["Dhanmondi Lake", "Abahani Field"],
        ),
        hours_of_operation: HoursOfOperation::every_day("11:00", "23:00"),
        signature_dishes: strings(&["Hot Wings", "Spicy Fried Chicken", "Chicken Burger"]),
        customer_rating: 4.8,
        services: services(true, true, true, false),
        dress_code: None,
        reservation_policy: "No reservations; orders taken at the counter".to_string(),
        special_features: strings(&["Family Friendly", "Kids Corner", "Air Conditioned"]),
        contact: contact(
            "+880 1713-090021",
            Some("dhanmondi@bfc.com.bd"),
            Some("https://bfc.com.bd"),
        ),
        established_year: 2012,
        description: "Bangladesh's home-grown fried chicken chain, busy with students and families \
                      from the Dhanmondi lakeside."
            .to_string(),
        average_wait_time: "10-15 minutes".to_string(),
        popular_times: strings(&["Friday 1pm-4pm", "Weekdays 6pm-9pm"]),
        payment_methods: strings(&["Cash", "bKash", "Visa", "Mastercard"]),
        photos: photos("bfc-dhanmondi", 2, 3),
    }
}

fn chillox_dhanmondi() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("chillox-dhanmondi"),
        name: "Chillox Dhanmondi".to_string(),
        cuisine_type: strings(&["Burgers", "Fast Food"]),
        price_range: PriceRange::Moderate,
        location: location(
            "House 12, Road 11A, Dhanmondi, Dhaka 1209",
            "Dhanmondi",
            23.7441,
            90.3738,
            &["Rabindra Sarobar", "Dhanmondi 11A Mosque"],
        ),
        hours_of_operation: HoursOfOperation::every_day("12:00", "23:30"),
        signature_dishes: strings(&["Naga Drums", "Beef Smoky Burger", "Chicken Cheese Burger"]),
        customer_rating: 4.6,
        services: services(true, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["Rooftop Seating", "Late Night"]),
        contact: contact("+880 1844-011911", None, Some("https://chillox.com.bd")),
        established_year: 2016,
        description: "Smash burgers and fiery naga wings with a queue that spills onto the \
                      street most evenings."
            .to_string(),
        average_wait_time: "20-30 minutes".to_string(),
        popular_times: strings(&["Thursday 8pm-11pm", "Friday 7pm-11pm"]),
        payment_methods: strings(&["Cash", "bKash", "Nagad", "Visa"]),
        photos: photos("chillox-dhanmondi", 2, 3),
    }
}

fn dhaba_express() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("dhaba-express"),
        name: "Dhaba Express".to_string(),
        cuisine_type: strings(&["Indian", "Street Food"]),
        price_range: PriceRange::Moderate,
        location: location(
            "Road 11, Block E, Banani, Dhaka 1213",
            "Banani",
            23.7937,
            90.4066,
            &["Banani Road 11", "Banani Super Market"],
        ),
        hours_of_operation: HoursOfOperation::every_day("12:00", "01:00"),
        signature_dishes: strings(&["Chicken Tikka Masala", "Butter Naan", "Seekh Kebab"]),
        customer_rating: 4.3,
        services: services(true, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["Late Night", "Outdoor Seating"]),
        contact: contact("+880 1755-662200", None, None),
        established_year: 2014,
        description: "Highway-style dhaba serving tandoor and chaat until well past midnight."
            .to_string(),
        average_wait_time: "15-20 minutes".to_string(),
        popular_times: strings(&["Daily 10pm-12am"]),
        payment_methods: strings(&["Cash", "bKash"]),
        photos: photos("dhaba-express", 1, 2),
    }
}

fn fakruddin_biryani() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("fakruddin-biryani"),
        name: "Fakruddin Biryani".to_string(),
        cuisine_type: strings(&["Bangladeshi", "Biryani"]),
        price_range: PriceRange::Budget,
        location: location(
            "House 1, Road 103, Gulshan 2, Dhaka 1212",
            "Gulshan",
            23.7956,
            90.4147,
            &["Gulshan 2 Circle", "Police Plaza Concord"],
        ),
        hours_of_operation: HoursOfOperation::every_day("11:00", "22:30"),
        signature_dishes: strings(&["Kacchi Biryani", "Chicken Roast", "Borhani"]),
        customer_rating: 4.7,
        services: services(true, true, true, true),
        dress_code: None,
        reservation_policy: "Reservations for groups of ten or more; catering booked a week ahead"
            .to_string(),
        special_features: strings(&["Catering", "Family Friendly"]),
        contact: contact(
            "+880 1711-536363",
            Some("info@fakruddin.com"),
            Some("https://fakruddin.com"),
        ),
        established_year: 1966,
        description: "Wedding-style kacchi from a name that has catered Dhaka celebrations for \
                      generations."
            .to_string(),
        average_wait_time: "10-20 minutes".to_string(),
        popular_times: strings(&["Friday 1pm-3pm", "Saturday 1pm-3pm"]),
        payment_methods: strings(&["Cash", "bKash", "Visa"]),
        photos: photos("fakruddin-biryani", 2, 3),
    }
}

fn gloria_jeans() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("gloria-jeans"),
        name: "Gloria Jean's Coffees".to_string(),
        cuisine_type: strings(&["Cafe", "Coffee", "Desserts"]),
        price_range: PriceRange::Moderate,
        location: location(
            "Plot 19, Gulshan Avenue, Gulshan 1, Dhaka 1212",
            "Gulshan",
            23.7808,
            90.4168,
            &["Gulshan 1 Circle", "Pink City Shopping Center"],
        ),
        hours_of_operation: HoursOfOperation::every_day("08:00", "23:00"),
        signature_dishes: strings(&["Mocha Freeze", "Caramel Latte", "Chocolate Mud Cake"]),
        customer_rating: 4.2,
        services: services(true, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["Free WiFi", "Work Friendly", "Air Conditioned"]),
        contact: contact(
            "+880 1730-011212",
            Some("gulshan@gloriajeans.com.bd"),
            Some("https://gloriajeanscoffees.com.bd"),
        ),
        established_year: 2011,
        description: "International coffee chain with quiet corners for meetings and laptops."
            .to_string(),
        average_wait_time: "5-10 minutes".to_string(),
        popular_times: strings(&["Weekdays 9am-11am", "Saturday 5pm-8pm"]),
        payment_methods: strings(&["Cash", "Visa", "Mastercard", "American Express"]),
        photos: photos("gloria-jeans", 3, 3),
    }
}

fn haji_biriyani() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("haji-biriyani"),
        name: "Haji Biriyani".to_string(),
        cuisine_type: strings(&["Bangladeshi", "Biryani", "Traditional"]),
        price_range: PriceRange::Budget,
        location: location(
            "70 Kazi Alauddin Road, Nazira Bazar, Dhaka 1000",
            "Old Dhaka",
            23.7176,
            90.4054,
            &["Nazira Bazar", "Bangshal Road"],
        ),
        hours_of_operation: HoursOfOperation::every_day("06:00", "13:00"),
        signature_dishes: strings(&["Mutton Biriyani", "Borhani"]),
        customer_rating: 4.9,
        services: services(false, true, true, false),
        dress_code: None,
        reservation_policy: "No reservations; first come, first served until the pots run out"
            .to_string(),
        special_features: strings(&["Heritage", "Sells Out Early"]),
        contact: contact("+880 2-9566020", None, None),
        established_year: 1939,
        description: "A single dish cooked the same way since 1939, served in lotus-leaf \
                      parcels in the lanes of Old Dhaka."
            .to_string(),
        average_wait_time: "20-40 minutes".to_string(),
        popular_times: strings(&["Daily 11am-1pm"]),
        payment_methods: strings(&["Cash"]),
        photos: photos("haji-biriyani", 1, 1),
    }
}

fn izumi_gulshan() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("izumi-gulshan"),
        name: "Izumi".to_string(),
        cuisine_type: strings(&["Japanese", "Sushi"]),
        price_range: PriceRange::Luxury,
        location: location(
            "House 24A, Road 113, Gulshan 2, Dhaka 1212",
            "Gulshan",
            23.7989,
            90.4162,
            &["Gulshan Lake Park", "United Hospital"],
        ),
        hours_of_operation: HoursOfOperation::every_day("12:00", "22:30")
            .with(Weekday::Monday, DailyHours::closed()),
        signature_dishes: strings(&["Salmon Sashimi", "Dragon Roll", "Beef Teppanyaki"]),
        customer_rating: 4.7,
        services: services(false, true, true, true),
        dress_code: Some("Smart casual".to_string()),
        reservation_policy: "Reservations recommended, required on weekends".to_string(),
        special_features: strings(&["Garden Seating", "Private Dining", "Sake Bar"]),
        contact: contact(
            "+880 1777-745522",
            Some("reservations@izumi.com.bd"),
            Some("https://izumi.com.bd"),
        ),
        established_year: 2013,
        description: "Contemporary Japanese dining in a converted Gulshan house with a leafy \
                      courtyard."
            .to_string(),
        average_wait_time: "30-45 minutes without reservation".to_string(),
        popular_times: strings(&["Friday 8pm-10pm", "Saturday 8pm-10pm"]),
        payment_methods: strings(&["Cash", "Visa", "Mastercard", "American Express"]),
        photos: photos("izumi-gulshan", 3, 4),
    }
}

fn kacchi_bhai() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("kacchi-bhai"),
        name: "Kacchi Bhai".to_string(),
        cuisine_type: strings(&["Bangladeshi", "Mughlai"]),
        price_range: PriceRange::Moderate,
        location: location(
            "Plot 5, Road 2, Section 6, Mirpur, Dhaka 1216",
            "Mirpur",
            23.8223,
            90.3654,
            &["Mirpur 10 Circle", "Shah Ali Market"],
        ),
        hours_of_operation: HoursOfOperation::every_day("11:00", "23:00")
            .with(Weekday::Friday, DailyHours::new("14:00", "23:00")),
        signature_dishes: strings(&["Kacchi Biryani (Mutton)", "Jali Kabab", "Firni"]),
        customer_rating: 4.8,
        services: services(true, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["Family Friendly", "Air Conditioned"]),
        contact: contact("+880 1958-112233", None, Some("https://kacchibhai.com")),
        established_year: 2017,
        description: "Basmati kacchi with tender mutton and a potato in every plate, at \
                      prices that keep the tables full."
            .to_string(),
        average_wait_time: "15-25 minutes".to_string(),
        popular_times: strings(&["Friday 2pm-4pm", "Daily 8pm-10pm"]),
        payment_methods: strings(&["Cash", "bKash", "Nagad", "Visa"]),
        photos: photos("kacchi-bhai", 2, 3),
    }
}

fn khazana_gulshan() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("khazana-gulshan"),
        name: "Khazana".to_string(),
        cuisine_type: strings(&["Indian", "Mughlai", "Fine Dining"]),
        price_range: PriceRange::Upscale,
        location: location(
            "House 2, Road 46, Gulshan 2, Dhaka 1212",
            "Gulshan",
            23.7941,
            90.4137,
            &["Gulshan 2 Circle", "Westin Dhaka"],
        ),
        hours_of_operation: HoursOfOperation::every_day("12:30", "23:00"),
        signature_dishes: strings(&["Dal Makhani", "Butter Chicken", "Galouti Kebab"]),
        customer_rating: 4.6,
        services: services(true, true, true, true),
        dress_code: Some("Smart casual".to_string()),
        reservation_policy: "Reservations recommended for dinner".to_string(),
        special_features: strings(&["Private Dining", "Live Ghazal on Thursdays"]),
        contact: contact(
            "+880 1713-044466",
            Some("info@khazanabd.com"),
            Some("https://khazanabd.com"),
        ),
        established_year: 2009,
        description: "North Indian classics from the tandoor, with slow-cooked dals and a \
                      long dessert list."
            .to_string(),
        average_wait_time: "15-30 minutes".to_string(),
        popular_times: strings(&["Thursday 8pm-10pm", "Friday 8pm-10pm"]),
        payment_methods: strings(&["Cash", "Visa", "Mastercard", "American Express"]),
        photos: photos("khazana-gulshan", 3, 3),
    }
}

fn mezban_uttara() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("mezban-uttara"),
        name: "Mezban Bari".to_string(),
        cuisine_type: strings(&["Bangladeshi", "Chittagonian"]),
        price_range: PriceRange::Moderate,
        location: location(
            "House 9, Road 7, Sector 4, Uttara, Dhaka 1230",
            "Uttara",
            23.8759,
            90.3795,
            &["Uttara Sector 4 Park", "Rajlakshmi Complex"],
        ),
        hours_of_operation: HoursOfOperation::every_day("11:00", "23:00")
            .with(Weekday::Friday, DailyHours::new("14:30", "23:00")),
        signature_dishes: strings(&["Mezban Special Biryani", "Mezbani Beef", "Kala Bhuna"]),
        customer_rating: 4.4,
        services: services(true, true, true, true),
        dress_code: None,
        reservation_policy: "Table bookings by phone for groups of six or more".to_string(),
        special_features: strings(&["Family Friendly", "Party Hall"]),
        contact: contact("+880 1819-445566", None, None),
        established_year: 2018,
        description: "Chittagong's feast-day mezbani beef, slow-cooked with mustard oil and \
                      served by the bowl."
            .to_string(),
        average_wait_time: "10-20 minutes".to_string(),
        popular_times: strings(&["Friday 2pm-4pm", "Saturday 8pm-10pm"]),
        payment_methods: strings(&["Cash", "bKash", "Visa"]),
        photos: photos("mezban-uttara", 2, 3),
    }
}

fn north_end_coffee() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("north-end-coffee"),
        name: "North End Coffee Roasters".to_string(),
        cuisine_type: strings(&["Cafe", "Coffee", "Bakery"]),
        price_range: PriceRange::Moderate,
        location: location(
            "House 59, Road 12, Block E, Banani, Dhaka 1213",
            "Banani",
            23.7930,
            90.4043,
            &["Banani Lake", "Kamal Ataturk Avenue"],
        ),
        hours_of_operation: HoursOfOperation::every_day("08:00", "20:00"),
        signature_dishes: strings(&["Cold Brew", "Cinnamon Roll", "Flat White"]),
        customer_rating: 4.5,
        services: services(false, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["In-house Roastery", "Free WiFi", "Work Friendly"]),
        contact: contact(
            "+880 1730-338899",
            Some("hello@northendcoffee.com"),
            Some("https://northendcoffee.com"),
        ),
        established_year: 2010,
        description: "Small-batch roastery with single-origin pour-overs and a bakery case \
                      that empties by noon."
            .to_string(),
        average_wait_time: "5-10 minutes".to_string(),
        popular_times: strings(&["Weekdays 8am-10am", "Saturday 10am-1pm"]),
        payment_methods: strings(&["Cash", "bKash", "Visa", "Mastercard"]),
        photos: photos("north-end-coffee", 2, 3),
    }
}

fn panshi_restaurant() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("panshi-restaurant"),
        name: "Panshi Restaurant".to_string(),
        cuisine_type: strings(&["Bangladeshi", "Sylheti"]),
        price_range: PriceRange::Budget,
        location: location(
            "Tajmahal Road, Block C, Mohammadpur, Dhaka 1207",
            "Mohammadpur",
            23.7662,
            90.3589,
            &["Tajmahal Road", "Mohammadpur Town Hall"],
        ),
        hours_of_operation: HoursOfOperation::every_day("06:00", "23:00"),
        signature_dishes: strings(&["Bhuna Khichuri", "Shatkora Beef", "Fish Curry"]),
        customer_rating: 4.5,
        services: services(false, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["Breakfast", "Large Portions"]),
        contact: contact("+880 1711-224455", None, None),
        established_year: 1998,
        description: "Sylheti home cooking by the plate, with a breakfast crowd that arrives \
                      before sunrise."
            .to_string(),
        average_wait_time: "10-15 minutes".to_string(),
        popular_times: strings(&["Daily 7am-9am", "Daily 1pm-3pm"]),
        payment_methods: strings(&["Cash", "bKash"]),
        photos: photos("panshi-restaurant", 1, 3),
    }
}

fn pizza_burg() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("pizza-burg"),
        name: "Pizzaburg".to_string(),
        cuisine_type: strings(&["Pizza", "Fast Food", "Italian"]),
        price_range: PriceRange::Budget,
        location: location(
            "Rupnagar Residential Area, Mirpur 2, Dhaka 1216",
            "Mirpur",
            23.8105,
            90.3560,
            &["Mirpur Stadium", "National Zoo"],
        ),
        hours_of_operation: HoursOfOperation::every_day("13:00", "23:00"),
        signature_dishes: strings(&[
            "Chicken Supreme Pizza",
            "Beef Pepperoni Pizza",
            "Cheese Blast Burger",
        ]),
        customer_rating: 4.0,
        services: services(true, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["Combo Deals", "Student Discounts"]),
        contact: contact("+880 1678-009900", None, Some("https://pizzaburg.com")),
        established_year: 2019,
        description: "Loaded pizzas and burgers priced for students, with a buy-one-get-one \
                      night every Tuesday."
            .to_string(),
        average_wait_time: "15-25 minutes".to_string(),
        popular_times: strings(&["Tuesday 7pm-10pm", "Friday 6pm-10pm"]),
        payment_methods: strings(&["Cash", "bKash", "Nagad"]),
        photos: photos("pizza-burg", 1, 3),
    }
}

fn spaghetti_jazz() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("spaghetti-jazz"),
        name: "Spaghetti Jazz".to_string(),
        cuisine_type: strings(&["Italian", "Continental"]),
        price_range: PriceRange::Upscale,
        location: location(
            "House 40, Road 16, Gulshan 1, Dhaka 1212",
            "Gulshan",
            23.7799,
            90.4154,
            &["Gulshan 1 Circle", "DCC Market"],
        ),
        hours_of_operation: HoursOfOperation::every_day("12:00", "23:00"),
        signature_dishes: strings(&["Spaghetti Carbonara", "Lasagna", "Tiramisu"]),
        customer_rating: 4.5,
        services: services(true, true, true, true),
        dress_code: Some("Smart casual".to_string()),
        reservation_policy: "Reservations recommended on jazz nights".to_string(),
        special_features: strings(&["Live Jazz on Fridays", "Wine List"]),
        contact: contact(
            "+880 1713-047777",
            Some("book@spaghettijazz.com"),
            Some("https://spaghettijazz.com"),
        ),
        established_year: 2005,
        description: "Fresh pasta and wood-fired pizza under exposed brick, with a trio \
                      playing standards on Friday nights."
            .to_string(),
        average_wait_time: "15-25 minutes".to_string(),
        popular_times: strings(&["Friday 8pm-11pm", "Saturday 8pm-10pm"]),
        payment_methods: strings(&["Cash", "Visa", "Mastercard", "American Express"]),
        photos: photos("spaghetti-jazz", 3, 3),
    }
}

fn star_kabab() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("star-kabab"),
        name: "Star Kabab & Restaurant".to_string(),
        cuisine_type: strings(&["Bangladeshi", "Kabab"]),
        price_range: PriceRange::Moderate,
        location: location(
            "House 1, Road 2, Dhanmondi, Dhaka 1205",
            "Dhanmondi",
            23.7389,
            90.3837,
            &["Science Lab Crossing", "City College"],
        ),
        hours_of_operation: HoursOfOperation::every_day("00:00", "23:59"),
        signature_dishes: strings(&["Mutton Biryani", "Chicken Tikka", "Naan with Kabab"]),
        customer_rating: 4.3,
        services: services(true, true, true, false),
        dress_code: None,
        reservation_policy: "Walk-in only".to_string(),
        special_features: strings(&["Open 24 Hours", "Breakfast"]),
        contact: contact("+880 2-9661022", None, None),
        established_year: 1988,
        description: "Round-the-clock kababs, naan and tea; as busy at three in the morning \
                      as at lunch."
            .to_string(),
        average_wait_time: "5-15 minutes".to_string(),
        popular_times: strings(&["Daily 1pm-3pm", "Daily 11pm-2am"]),
        payment_methods: strings(&["Cash", "bKash"]),
        photos: photos("star-kabab", 2, 3),
    }
}

fn the_atrium() -> Restaurant {
    Restaurant {
        id: RestaurantId::new("the-atrium"),
        name: "The Atrium".to_string(),
        cuisine_type: strings(&["International", "Buffet"]),
        price_range: PriceRange::Luxury,
        location: location(
            "Level 12, Plot 5, Block A, Bashundhara R/A, Dhaka 1229",
            "Bashundhara",
            23.8143,
            90.4252,
            &["International Convention City Bashundhara", "Jamuna Future Park"],
        ),
        hours_of_operation: HoursOfOperation::every_day("12:00", "23:00").without(Weekday::Monday),
        signature_dishes: strings(&["Seafood Platter", "Lamb Shank", "Chocolate Fountain"]),
        customer_rating: 4.4,
        services: services(false, false, true, true),
        dress_code: Some("Formal".to_string()),
        reservation_policy: "Reservations required, confirmed 24 hours ahead".to_string(),
        special_features: strings(&["Rooftop View", "Live Cooking Stations", "Valet Parking"]),
        contact: contact(
            "+880 1844-555000",
            Some("dine@theatrium.com.bd"),
            Some("https://theatrium.com.bd"),
        ),
        established_year: 2021,
        description: "Rooftop buffet with a dozen live stations; closed Mondays.".to_string(),
        average_wait_time: "Seated on reservation".to_string(),
        popular_times: strings(&["Friday 1pm-3pm", "Saturday 8pm-10pm"]),
        payment_methods: strings(&["Visa", "Mastercard", "American Express"]),
        photos: photos("the-atrium", 4, 4),
    }
}
