//! Static marketing copy and the small bits of logic that go with it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🚗",
        title: "Direct Car Sourcing",
        subtitle: "車両調達",
        description: "Access Japan's vast automotive market through our extensive network. From rare JDM legends to practical daily drivers, we locate exactly what you're looking for.",
        features: &[
            "Access to all major Japanese auctions",
            "Private seller negotiations",
            "Dealership sourcing for specific models",
            "Personalized search based on your criteria",
        ],
    },
    Service {
        icon: "🔍",
        title: "Auction Bidding & Inspection",
        subtitle: "競売検査",
        description: "Never bid blind. Our certified inspectors provide detailed condition reports before you commit, ensuring complete transparency and informed decisions.",
        features: &[
            "Pre-auction vehicle inspections",
            "100+ point condition reports",
            "High-resolution photo documentation",
            "Auction grade verification",
        ],
    },
    Service {
        icon: "🚢",
        title: "Shipping & Customs",
        subtitle: "輸送通関",
        description: "From Japanese port to your destination, we manage the entire shipping process. Secure containerized transport with real-time tracking and full insurance coverage.",
        features: &[
            "RoRo and container shipping options",
            "Marine transit insurance",
            "Real-time shipment tracking",
            "Customs brokerage services",
        ],
    },
    Service {
        icon: "📄",
        title: "Compliance & Documentation",
        subtitle: "法規準拠",
        description: "Navigate complex import regulations with confidence. We ensure your vehicle meets all destination country requirements for a smooth registration process.",
        features: &[
            "Emissions compliance testing",
            "Safety modifications if required",
            "Full documentation package",
            "Registration assistance",
        ],
    },
    Service {
        icon: "💴",
        title: "Cost Transparency",
        subtitle: "費用明細",
        description: "No surprises, no hidden fees. We provide detailed breakdowns of all costs upfront: vehicle price, auction fees, shipping, duties, and our service fees.",
        features: &[
            "Itemized cost estimates",
            "Currency conversion guidance",
            "Duty and tax calculations",
            "No hidden charges guarantee",
        ],
    },
    Service {
        icon: "🛡️",
        title: "End-to-End Support",
        subtitle: "完全支援",
        description: "From your first inquiry to the moment you turn the key, our team is with you. Questions, concerns, updates: we're always just a message away.",
        features: &[
            "Dedicated customer liaison",
            "Regular progress updates",
            "Post-delivery support",
            "Warranty assistance",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        icon: "🔎",
        title: "Vehicle Selection",
        subtitle: "探す",
        description: "Browse Japan's extensive auction network with our guidance. We help you identify the perfect vehicle matching your specifications, budget, and preferences.",
    },
    ProcessStep {
        icon: "📋",
        title: "Professional Inspection",
        subtitle: "検査",
        description: "Our certified inspectors thoroughly examine your chosen vehicle. Receive detailed reports with high-resolution images covering every aspect of the car's condition.",
    },
    ProcessStep {
        icon: "🔨",
        title: "Auction Bidding",
        subtitle: "入札",
        description: "We handle the competitive bidding process on your behalf, leveraging our expertise to secure your vehicle at the best possible price.",
    },
    ProcessStep {
        icon: "🚢",
        title: "International Shipping",
        subtitle: "輸送",
        description: "Your vehicle is carefully loaded into a secure container and shipped via established routes. Track your car in real-time throughout the journey.",
    },
    ProcessStep {
        icon: "📑",
        title: "Compliance & Documentation",
        subtitle: "書類",
        description: "We navigate the complex import regulations specific to your country. All paperwork, customs clearance, and compliance requirements handled seamlessly.",
    },
    ProcessStep {
        icon: "🚚",
        title: "Delivery",
        subtitle: "配達",
        description: "Your dream car arrives at your doorstep, fully compliant and ready to drive. We're with you every step of the way until you're completely satisfied.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        question: "How long does the entire import process take?",
        answer: "The typical timeline is 8-12 weeks from winning a bid to delivery. This includes auction (1-2 weeks), port processing and shipping (4-6 weeks), customs clearance (1-2 weeks), and compliance/delivery (1-2 weeks). We provide tracking and updates throughout the entire journey.",
    },
    FaqItem {
        question: "What countries can you ship to?",
        answer: "We ship worldwide, with established routes to the USA, Canada, UK, Australia, New Zealand, Ireland, and most European nations. Each country has specific import regulations, and we're experienced in navigating compliance requirements for all major destinations.",
    },
    FaqItem {
        question: "How do I know the car's condition before bidding?",
        answer: "Our certified inspectors provide comprehensive pre-auction inspection reports. These include 100+ point condition checks, high-resolution photographs (including undercarriage), auction sheet translations, and honest assessments of any issues. You'll know exactly what you're bidding on.",
    },
    FaqItem {
        question: "What types of vehicles can I import?",
        answer: "Import eligibility depends on your destination country's regulations. Generally, vehicles over 25 years old (USA), 15 years (Canada, Australia), or those meeting specific emissions standards (UK/EU) are eligible. We'll help you understand what's importable to your specific location.",
    },
    FaqItem {
        question: "What costs are involved in importing a car?",
        answer: "Total costs include: vehicle purchase price, auction fees, our sourcing/inspection fee, domestic Japan transport, export documentation, international shipping, marine insurance, customs duties (varies by country), compliance modifications (if required), and local registration fees. We provide detailed estimates upfront with no hidden charges.",
    },
    FaqItem {
        question: "How do I pay for the vehicle?",
        answer: "We accept bank wire transfers for all transactions. A deposit is required when you decide to bid on a vehicle, with the balance due upon successful auction. We provide clear payment timelines and assist with international wire transfers if you're unfamiliar with the process.",
    },
    FaqItem {
        question: "What if the car doesn't pass inspection?",
        answer: "If our inspection reveals issues that don't match your expectations, you're under no obligation to proceed with the bid. We'll discuss the findings and help you decide whether to continue or search for another vehicle. Transparency is our foundation.",
    },
    FaqItem {
        question: "Do you handle right-hand to left-hand drive conversions?",
        answer: "While we don't perform conversions ourselves, we can connect you with trusted specialists in your country if conversion is required. However, many enthusiasts prefer to keep their JDM vehicles in original right-hand drive configuration.",
    },
    FaqItem {
        question: "What happens if the car is damaged during shipping?",
        answer: "All shipments include comprehensive marine transit insurance. In the rare event of shipping damage, the insurance covers repair or replacement costs. We document the vehicle's condition before shipping and upon arrival for complete protection.",
    },
    FaqItem {
        question: "Can I track my vehicle during shipping?",
        answer: "Yes, we provide real-time tracking once your vehicle is loaded onto the vessel. You'll receive updates at key milestones: port departure, estimated arrival, customs clearance, and delivery scheduling. We keep you informed every step of the way.",
    },
];

/// Accordion where at most one answer is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index`, or closes it when it is already the open item.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub location: &'static str,
    pub vehicle: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "JapWorld made importing my R34 GT-R an absolute breeze. The inspection report was incredibly detailed and I knew exactly what I was bidding on. The car arrived in even better condition than I expected.",
        author: "Marcus D.",
        location: "California, USA",
        vehicle: "1999 Nissan Skyline R34 GT-R",
        rating: 5,
    },
    Testimonial {
        quote: "After getting burned by another importer, I was skeptical. JapWorld's transparency changed everything. Regular updates, honest assessments, and zero surprises. My 180SX is perfect.",
        author: "James T.",
        location: "Melbourne, Australia",
        vehicle: "1996 Nissan 180SX Type X",
        rating: 5,
    },
    Testimonial {
        quote: "The team helped me find a pristine MX-5 that I'd been searching for years. Their knowledge of Japanese auctions and attention to detail is unmatched. Highly recommended.",
        author: "Elena K.",
        location: "London, UK",
        vehicle: "1994 Mazda MX-5 V-Special",
        rating: 5,
    },
    Testimonial {
        quote: "From the first email to delivery, the communication was exceptional. They explained every step of the process and handled all the compliance paperwork. Couldn't be happier with my Supra.",
        author: "David R.",
        location: "Toronto, Canada",
        vehicle: "1997 Toyota Supra RZ-S",
        rating: 5,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "500+", label: "Vehicles Imported" },
    Stat { value: "25+", label: "Countries Served" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "10+", label: "Years Experience" },
];

pub const WHY_JAPAN: &[&str] = &[
    "Rigorous inspection standards",
    "Lower average mileage",
    "Exceptional vehicle maintenance",
    "Access to JDM-exclusive models",
    "Competitive pricing",
    "Complete service history",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuctionHouse {
    pub name: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub specialties: &'static [&'static str],
}

pub const AUCTION_HOUSES: &[AuctionHouse] = &[
    AuctionHouse {
        name: "USS Tokyo",
        location: "Tokyo, Japan",
        description: "Japan's largest used car auction house with over 10,000 vehicles weekly.",
        specialties: &["Sports Cars", "Luxury Vehicles", "JDM Classics"],
    },
    AuctionHouse {
        name: "JAA Nagoya",
        location: "Nagoya, Japan",
        description: "Major auction facility specializing in high-grade vehicles and rare models.",
        specialties: &["Premium Models", "Low Mileage", "Collector Cars"],
    },
    AuctionHouse {
        name: "CAA Osaka",
        location: "Osaka, Japan",
        description: "Western Japan's premier auction house with extensive inventory.",
        specialties: &["Daily Drivers", "Commercial Vehicles", "Kei Cars"],
    },
];

/// Case-insensitive match on name, location or any specialty. Every term in
/// the query must match somewhere; a blank query returns everything.
pub fn search_auction_houses(query: &str) -> Vec<AuctionHouse> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|term| term.to_lowercase())
        .collect();

    AUCTION_HOUSES
        .iter()
        .filter(|house| {
            let haystack = format!(
                "{} {} {}",
                house.name,
                house.location,
                house.specialties.join(" ")
            )
            .to_lowercase();
            terms.iter().all(|term| haystack.contains(term.as_str()))
        })
        .copied()
        .collect()
}
