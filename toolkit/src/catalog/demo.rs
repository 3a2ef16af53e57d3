//! Built-in storefront demo catalog.

use super::{
    AiInsights, Battery, BikeRecord, Components, ContentTemplate, DataProvider, EndpointHealth, EndpointStatus,
    Features, FeedSource, Frame, Motor, PerformanceData, RangeSpec, Reviews, Scores, ServiceLocation, ServicePackage,
    SyncStatus, TestRideLocation, VendorMetrics, VendorRecord, VendorStatus,
};

/// Literal demo data used when the host supplies nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoData;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

fn endpoint(name: &str, status: EndpointStatus, response_time: u32) -> EndpointHealth {
    EndpointHealth { name: name.to_owned(), status, response_time }
}

fn standard_endpoints(statuses: [(EndpointStatus, u32); 4]) -> Vec<EndpointHealth> {
    ["Products", "Inventory", "Specifications", "Images"]
        .into_iter()
        .zip(statuses)
        .map(|(name, (status, ms))| endpoint(name, status, ms))
        .collect()
}

struct BikeSeed<'a> {
    key: &'a str,
    name: &'a str,
    price: u32,
    category: &'a str,
    motor: (&'a str, &'a str, u32),
    battery: (u32, &'a str, &'a str, f64),
    frame: (&'a str, &'a str, f64, &'a str),
    components: [&'a str; 5],
    features: [&'a str; 5],
    scores: [f64; 5],
    best_for: [&'a str; 3],
    terrain: &'a [&'a str],
    experience: &'a str,
    maintenance: &'a str,
    reviews: (f64, u32, &'a [&'a str], &'a [&'a str]),
}

impl BikeSeed<'_> {
    fn build(&self) -> BikeRecord {
        let [gears, brakes, suspension, wheels, display] = self.components;
        let [lights, mudguards, rack, kickstand, lock_prep] = self.features;
        let [comfort, performance, value_for_money, durability, ease_of_use] = self.scores;
        BikeRecord {
            key: self.key.to_owned(),
            name: self.name.to_owned(),
            brand: "Godspeed".to_owned(),
            price: self.price,
            category: self.category.to_owned(),
            image: format!("/assets/bike-{}.jpg", self.key),
            motor: Motor {
                brand: self.motor.0.to_owned(),
                model: self.motor.1.to_owned(),
                power: 250,
                torque: self.motor.2,
                position: "Mid-drive".to_owned(),
            },
            battery: Battery {
                capacity: self.battery.0,
                brand: self.battery.1.to_owned(),
                range: self.battery.2.to_owned(),
                removable: true,
                charging_time: self.battery.3,
            },
            frame: Frame {
                material: self.frame.0.to_owned(),
                size: self.frame.1.to_owned(),
                weight: self.frame.2,
                geometry: self.frame.3.to_owned(),
            },
            components: Components {
                gears: gears.to_owned(),
                brakes: brakes.to_owned(),
                suspension: suspension.to_owned(),
                wheels: wheels.to_owned(),
                display: display.to_owned(),
            },
            features: Features {
                lights: lights.to_owned(),
                mudguards: mudguards.to_owned(),
                rack: rack.to_owned(),
                kickstand: kickstand.to_owned(),
                lock_prep: lock_prep.to_owned(),
            },
            scores: Scores { comfort, performance, value_for_money, durability, ease_of_use },
            ai_insights: AiInsights {
                best_for: strings(&self.best_for),
                terrain_suitability: strings(self.terrain),
                user_experience: self.experience.to_owned(),
                maintenance_level: self.maintenance.to_owned(),
            },
            reviews: Reviews {
                rating: self.reviews.0,
                count: self.reviews.1,
                highlights: strings(self.reviews.2),
                concerns: strings(self.reviews.3),
            },
        }
    }
}

const BIKES: [BikeSeed<'static>; 4] = [
    BikeSeed {
        key: "city-comfort",
        name: "City Comfort Pro",
        price: 2499,
        category: "city",
        motor: ("Bosch", "Active Line Plus", 50),
        battery: (400, "Bosch", "60-100", 4.5),
        frame: ("Aluminium", "46-58cm", 24.0, "Step-through"),
        components: ["8-Gang Shimano", "Shimano Hydraulik", "Federgabel vorne", "28\"", "Bosch Intuvia"],
        features: ["Integrated LED", "Yes", "Yes", "Yes", "Yes"],
        scores: [9.2, 7.1, 8.9, 8.8, 9.5],
        best_for: ["commuting", "casual-riding", "city-exploration"],
        terrain: &["city", "paved-paths", "light-gravel"],
        experience: "beginner-friendly",
        maintenance: "low",
        reviews: (4.6, 342, &["Very comfortable", "Easy to use", "Great value"], &["Limited off-road capability"]),
    },
    BikeSeed {
        key: "trekking-sport",
        name: "Trekking Sport X1",
        price: 3299,
        category: "trekking",
        motor: ("Bosch", "Performance CX", 85),
        battery: (625, "Bosch", "80-120", 6.0),
        frame: ("Aluminium", "48-62cm", 26.0, "Diamond"),
        components: ["12-Gang SRAM", "SRAM Level Hydraulik", "Federgabel vorne", "28\"", "Bosch Kiox"],
        features: ["Integrated LED", "Yes", "Yes", "Yes", "Yes"],
        scores: [8.5, 8.9, 8.2, 9.1, 8.0],
        best_for: ["long-distance", "touring", "mixed-terrain"],
        terrain: &["city", "country-roads", "gravel", "light-trails"],
        experience: "intermediate",
        maintenance: "medium",
        reviews: (4.7, 218, &["Excellent range", "Versatile", "Quality components"], &["Higher price point"]),
    },
    BikeSeed {
        key: "mountain-trail",
        name: "Mountain Trail Pro",
        price: 4799,
        category: "mountain",
        motor: ("Shimano", "EP8", 85),
        battery: (630, "Shimano", "60-90", 5.5),
        frame: ("Carbon", "44-58cm", 23.0, "Mountain"),
        components: [
            "12-Gang Shimano XT",
            "Shimano XT 4-Kolben",
            "Full Suspension 140mm",
            "29\"",
            "Shimano E-Tube",
        ],
        features: ["Optional", "Optional", "No", "No", "Yes"],
        scores: [7.8, 9.5, 7.5, 8.9, 6.8],
        best_for: ["trail-riding", "mountain-biking", "technical-terrain"],
        terrain: &["trails", "mountains", "rough-terrain"],
        experience: "advanced",
        maintenance: "high",
        reviews: (
            4.8,
            156,
            &["Incredible performance", "Lightweight", "Top components"],
            &["Expensive", "Requires skill"],
        ),
    },
    BikeSeed {
        key: "cargo-family",
        name: "Cargo Family+",
        price: 3899,
        category: "cargo",
        motor: ("Bosch", "Cargo Line", 85),
        battery: (500, "Bosch", "50-80", 5.0),
        frame: ("Steel reinforced", "48-56cm", 35.0, "Longtail"),
        components: ["8-Gang Shimano", "Magura MT5 Hydraulik", "Keine", "26\"", "Bosch Intuvia"],
        features: ["Integrated LED", "Yes", "Cargo platform", "Double kickstand", "Yes"],
        scores: [8.0, 7.5, 8.7, 9.3, 7.2],
        best_for: ["family-transport", "cargo-hauling", "child-transport"],
        terrain: &["city", "paved-paths"],
        experience: "intermediate",
        maintenance: "medium",
        reviews: (4.5, 89, &["Great for families", "Stable with load", "Well-built"], &["Heavy", "Takes space"]),
    },
];

impl DataProvider for DemoData {
    fn bikes(&self) -> Vec<BikeRecord> {
        BIKES.iter().map(BikeSeed::build).collect()
    }

    fn range_specs(&self) -> Vec<RangeSpec> {
        [
            ("city-comfort", "City Comfort Pro", 400.0, 12.0, 0.85),
            ("trekking-sport", "Trekking Sport X1", 625.0, 14.0, 0.82),
            ("mountain-trail", "Mountain Trail Pro", 630.0, 18.0, 0.80),
            ("cargo-family", "Cargo Family+", 500.0, 20.0, 0.75),
        ]
        .into_iter()
        .map(|(key, name, battery_capacity, base_consumption, efficiency)| RangeSpec {
            key: key.to_owned(),
            name: name.to_owned(),
            battery_capacity,
            base_consumption,
            efficiency,
        })
        .collect()
    }

    fn test_ride_locations(&self) -> Vec<TestRideLocation> {
        [
            ("zurich", "Zürich", "Bahnhofstrasse 1, 8001 Zürich"),
            ("basel", "Basel", "Freie Strasse 25, 4001 Basel"),
            ("bern", "Bern", "Spitalgasse 4, 3011 Bern"),
        ]
        .into_iter()
        .map(|(key, name, address)| TestRideLocation {
            key: key.to_owned(),
            name: name.to_owned(),
            address: address.to_owned(),
            phone: None,
        })
        .collect()
    }

    fn service_packages(&self) -> Vec<ServicePackage> {
        vec![
            ServicePackage {
                key: "basic".to_owned(),
                name: "Basic Service".to_owned(),
                price: 89,
                duration: 60,
                description: "Essential maintenance check and tune-up".to_owned(),
                included: strings(&[
                    "Brake adjustment and lubrication",
                    "Gear shifting optimization",
                    "Tire pressure check",
                    "Chain cleaning and lubrication",
                    "General safety inspection",
                ]),
            },
            ServicePackage {
                key: "standard".to_owned(),
                name: "Standard Service".to_owned(),
                price: 149,
                duration: 90,
                description: "Comprehensive service with battery health check".to_owned(),
                included: strings(&[
                    "All Basic Service items",
                    "Battery health and capacity test",
                    "Motor performance diagnostics",
                    "Brake pad inspection",
                    "Wheel truing and spoke tension",
                    "Display and electronics check",
                ]),
            },
            ServicePackage {
                key: "premium".to_owned(),
                name: "Premium Service".to_owned(),
                price: 219,
                duration: 120,
                description: "Complete overhaul with parts replacement if needed".to_owned(),
                included: strings(&[
                    "All Standard Service items",
                    "Parts replacement (brake pads, cables)",
                    "Deep drivetrain cleaning",
                    "Suspension service (if applicable)",
                    "Software updates and calibration",
                    "Free pickup and delivery",
                ]),
            },
            ServicePackage {
                key: "express".to_owned(),
                name: "Express Repair".to_owned(),
                price: 49,
                duration: 30,
                description: "Quick fixes and emergency repairs".to_owned(),
                included: strings(&[
                    "Flat tire repair",
                    "Quick brake adjustment",
                    "Chain repair",
                    "Basic diagnostics",
                    "While-you-wait service",
                ]),
            },
        ]
    }

    fn service_locations(&self) -> Vec<ServiceLocation> {
        [
            (
                "zurich",
                "Godspeed Zürich Zentrum",
                "Bahnhofstrasse 45, 8001 Zürich",
                "+41 44 123 45 67",
                "Mo-Fr: 9:00-18:00, Sa: 9:00-17:00",
                &["basic", "standard", "premium", "express"][..],
            ),
            (
                "bern",
                "Godspeed Bern",
                "Kramgasse 82, 3011 Bern",
                "+41 31 987 65 43",
                "Mo-Fr: 8:30-18:30, Sa: 9:00-16:00",
                &["basic", "standard", "premium"][..],
            ),
            (
                "basel",
                "Godspeed Basel",
                "Steinenvorstadt 71, 4051 Basel",
                "+41 61 456 78 90",
                "Mo-Fr: 9:00-18:00, Sa: 10:00-17:00",
                &["basic", "standard", "express"][..],
            ),
        ]
        .into_iter()
        .map(|(key, name, address, phone, hours, services)| ServiceLocation {
            key: key.to_owned(),
            name: name.to_owned(),
            address: address.to_owned(),
            phone: phone.to_owned(),
            hours: hours.to_owned(),
            services: strings(services),
        })
        .collect()
    }

    fn vendors(&self) -> Vec<VendorRecord> {
        use EndpointStatus::{Error, Healthy, Maintenance, Warning};

        let vendor = |key: &str,
                      name: &str,
                      status: VendorStatus,
                      api_url: &str,
                      last_sync_secs_ago: u32,
                      sync_status: SyncStatus,
                      metrics: [u32; 5],
                      endpoints: Vec<EndpointHealth>| {
            let [total_products, synced_today, failed_syncs, avg_response_time, rate_limit_used] = metrics;
            VendorRecord {
                key: key.to_owned(),
                name: name.to_owned(),
                status,
                api_url: api_url.to_owned(),
                last_sync_secs_ago,
                sync_status,
                metrics: VendorMetrics { total_products, synced_today, failed_syncs, avg_response_time, rate_limit_used },
                endpoints,
            }
        };

        vec![
            vendor(
                "bosch",
                "Bosch eBike Systems",
                VendorStatus::Connected,
                "https://api.bosch-ebike.com/v1",
                120,
                SyncStatus::Success,
                [1247, 45, 2, 350, 78],
                standard_endpoints([(Healthy, 245), (Healthy, 412), (Warning, 850), (Healthy, 180)]),
            ),
            vendor(
                "shimano",
                "Shimano Steps",
                VendorStatus::Connected,
                "https://api.shimano-steps.com/v2",
                180,
                SyncStatus::Success,
                [892, 31, 0, 280, 45],
                standard_endpoints([(Healthy, 190), (Healthy, 320), (Healthy, 275), (Healthy, 165)]),
            ),
            vendor(
                "specialized",
                "Specialized Turbo",
                VendorStatus::Warning,
                "https://api.specialized.com/turbo/v1",
                900,
                SyncStatus::PartialFailure,
                [634, 12, 8, 1200, 95],
                standard_endpoints([(Error, 2100), (Healthy, 450), (Warning, 1800), (Healthy, 230)]),
            ),
            vendor(
                "trek",
                "Trek eBikes",
                VendorStatus::Maintenance,
                "https://api.trek.com/ebikes/v1",
                3600,
                SyncStatus::Maintenance,
                [456, 0, 0, 0, 0],
                standard_endpoints([(Maintenance, 0), (Maintenance, 0), (Maintenance, 0), (Maintenance, 0)]),
            ),
            vendor(
                "velo_connect",
                "VeloConnect Hub",
                VendorStatus::Connected,
                "https://api.veloconnect.ch/v3",
                60,
                SyncStatus::Success,
                [2834, 156, 3, 180, 34],
                vec![
                    endpoint("Aggregated Feed", Healthy, 145),
                    endpoint("Price Updates", Healthy, 220),
                    endpoint("Inventory Sync", Healthy, 175),
                    endpoint("Media Assets", Healthy, 95),
                ],
            ),
        ]
    }

    fn performance(&self) -> PerformanceData {
        PerformanceData {
            total_api_calls: 15742,
            successful_calls: 14891,
            failed_calls: 851,
            average_response_time: 285,
            data_transferred: "2.4 GB".to_owned(),
            uptime: "99.2%".to_owned(),
        }
    }

    fn feed_sources(&self) -> Vec<FeedSource> {
        [
            ("Bike Europe", "https://www.bike-europe.com/rss", "industry"),
            ("Electric Bike Report", "https://electricbikereport.com/feed/", "reviews"),
            ("Pedelec Magazine", "https://www.pedelec-magazin.de/feed/", "news"),
            ("E-Bike News", "https://ebike-news.de/feed/", "german"),
            ("Swiss Cycling", "https://www.swiss-cycling.ch/feed/", "swiss"),
        ]
        .into_iter()
        .map(|(name, url, category)| FeedSource { name: name.to_owned(), url: url.to_owned(), category: category.to_owned() })
        .collect()
    }

    fn content_templates(&self) -> Vec<ContentTemplate> {
        [
            (
                "industry_news",
                &["headline", "summary", "context", "analysis", "implications", "cta"][..],
                "professional",
                "800-1200",
            ),
            (
                "buying_guide",
                &["problem", "overview", "comparison", "recommendations", "next_steps"][..],
                "helpful",
                "1200-1800",
            ),
            ("maintenance", &["context", "instructions", "tools", "tips", "service_link"][..], "instructional", "800-1500"),
        ]
        .into_iter()
        .map(|(key, structure, tone, length)| ContentTemplate {
            key: key.to_owned(),
            structure: strings(structure),
            tone: tone.to_owned(),
            length: length.to_owned(),
        })
        .collect()
    }
}
