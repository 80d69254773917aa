//! Seed catalogue served by `app()`.

use crate::Service;

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    title: &str,
    category: &str,
    provider: &str,
    price: f64,
    rating: f64,
    review_count: u32,
    is_bookmarked: bool,
    is_popular: bool,
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        provider: provider.to_string(),
        price,
        rating,
        review_count,
        image: format!("https://images.booking.example/services/{id}.jpg"),
        is_bookmarked,
        is_popular,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service("1", "Home Deep Cleaning", "Cleaning", "Sparkle Co", 60.0, 4.8, 231, false, true),
        service("2", "Carpet Shampoo", "Cleaning", "Fresh Floors", 45.0, 4.5, 88, true, false),
        service("3", "Leaky Faucet Repair", "Repairing", "Pipe Pros", 35.0, 4.6, 142, false, true),
        service("4", "AC Servicing", "Repairing", "CoolAir", 70.0, 4.3, 57, false, false),
        service("5", "Interior Wall Painting", "Painting", "Brush Masters", 120.0, 4.9, 64, true, true),
        service("6", "Hair Cut at Home", "Salon", "Style on Wheels", 25.0, 4.2, 310, false, false),
        service("7", "Bathroom Sanitizing", "Cleaning", "Sparkle Co", 40.0, 4.7, 99, false, false),
        service("8", "Electrical Wiring Check", "Repairing", "Volt Works", 55.0, 4.4, 21, false, true),
    ]
}
