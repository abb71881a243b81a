use omicron_catalog::Record;

#[allow(dead_code)]
pub fn phone(brand: &str, model: &str, os: &str, price: f64, ram: f64) -> Record {
    let mut r = Record::new(brand, model);
    r.operating_system = os.into();
    r.price = Some(price);
    r.ram_gib = Some(ram);
    r
}

/// Два телефона из сценария: A (Samsung) и B (Apple).
#[allow(dead_code)]
pub fn scenario() -> Vec<Record> {
    vec![
        phone("Samsung", "Galaxy S21", "android", 12_000.0, 8.0),
        phone("Apple", "iPhone 13", "ios", 25_000.0, 4.0),
    ]
}

/// Побольше записей для свойств.
#[allow(dead_code)]
pub fn catalog() -> Vec<Record> {
    let mut out = scenario();
    let mut extra = vec![
        phone("Samsung", "Galaxy A54", "android", 18_000.0, 6.0),
        phone("Xiaomi", "Redmi Note 12", "android", 9_999.0, 4.0),
        phone("Xiaomi", "Poco F5", "android", 29_999.0, 12.0),
        phone("Apple", "iPhone 15 Pro", "ios", 60_000.0, 8.0),
        phone("Google", "Pixel 7a", "android", 30_000.0, 8.0),
        phone("Nokia", "G20", "android", 8_000.0, 4.0),
    ];
    extra[0].processor_family = "exynos".into();
    extra[2].processor_family = "snapdragon".into();
    extra[4].processor_family = "google tensor".into();
    extra[1].battery_mah = Some(5000.0);
    extra[5].battery_mah = Some(5050.0);
    extra[3].rear_camera_mp = Some(48.0);
    extra[4].screen_inches = Some(6.1);
    // без цены и RAM
    extra.push(Record::new("Motorola", "Moto G84"));
    out.extend(extra);
    out
}
