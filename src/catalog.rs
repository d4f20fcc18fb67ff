//! The fixed service catalog shown by the kiosk.
//!
//! Entries are defined at build time and never mutated. Per-device media
//! substitutions are layered on top by [`crate::slides`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Standard,
    Golden,
    Kids,
    Hero,
    Partners,
    Contact,
    Reviews,
}

impl SlideKind {
    /// Unknown tags are treated as standard slides.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "golden" => Self::Golden,
            "kids" => Self::Kids,
            "hero" => Self::Hero,
            "partners" => Self::Partners,
            "contact" => Self::Contact,
            "reviews" => Self::Reviews,
            _ => Self::Standard,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Golden => "golden",
            Self::Kids => "kids",
            Self::Hero => "hero",
            Self::Partners => "partners",
            Self::Contact => "contact",
            Self::Reviews => "reviews",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ServiceDetails {
    pub requirements: &'static [&'static str],
    pub processing_time: &'static str,
    pub additional_info: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct ServiceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub image_keyword: &'static str,
    pub custom_image: Option<&'static str>,
    pub background: Option<&'static str>,
    pub video_url: Option<&'static str>,
    pub features: &'static [&'static str],
    pub details: Option<ServiceDetails>,
    pub kind: SlideKind,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub struct Partner {
    pub name: &'static str,
    pub sub: &'static str,
}

pub fn find(id: &str) -> Option<&'static ServiceItem> {
    SERVICES.iter().find(|s| s.id == id)
}

const fn unsplash(photo: &'static str) -> Option<&'static str> {
    Some(photo)
}

pub static SERVICES: &[ServiceItem] = &[
    // --- Hero ---
    ServiceItem {
        id: "hero",
        title: "Welcome",
        description: "Your Gateway to Government Services",
        icon: "Home",
        image_keyword: "luxury",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1512453979798-5ea904ac6605?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[],
        details: None,
        kind: SlideKind::Hero,
    },
    // --- Visa & residency ---
    ServiceItem {
        id: "golden-visa",
        title: "UAE Golden Visa",
        description: "Secure your future with a 10-Year Residency. Available for Investors, Professionals, and Skilled Talent.",
        icon: "Star",
        image_keyword: "dubai,skyscraper",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1546412414-e1885259563a?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "10-Year Self-Sponsorship",
            "Real Estate Investors (2M+)",
            "Doctors & Scientists",
            "Creative Professionals",
            "Skilled Employees (Salary 30k+)",
            "Family & Parent Sponsorship",
            "High School Top Achievers",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Passport Copy & Visa Copy",
                "Personal Photo (White Background)",
                "Property Deed (If Investor)",
                "Salary Certificate & Bank Statement (If Employee)",
                "University Degree (Attested)",
                "Health Insurance",
            ],
            processing_time: "5 - 10 Working Days",
            additional_info: Some("Nomination approval may be required for specific categories."),
        }),
        kind: SlideKind::Golden,
    },
    ServiceItem {
        id: "emirates-id",
        title: "Emirates ID Services",
        description: "Complete assistance for Federal Authority for Identity and Citizenship services.",
        icon: "IdCard",
        image_keyword: "technology,fingerprint",
        custom_image: unsplash("https://images.unsplash.com/photo-1563986768609-322da13575f3?q=80&w=1920&auto=format&fit=crop"),
        background: unsplash("https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "New ID Application",
            "ID Card Renewal",
            "Lost / Damaged Replacement",
            "Update Mobile Number",
            "Update Personal Details",
            "Biometric Appointments",
            "Fine Payments & Appeals",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Original Passport",
                "Current Visa / Residency",
                "Personal Photo (Soft Copy)",
                "Previous Emirates ID (For Renewal)",
            ],
            processing_time: "24 Hours (Typing)",
            additional_info: Some("Biometric fingerprinting may be required for new applicants."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "family-visa",
        title: "Family & Dependent Visa",
        description: "Sponsor your spouse, children, and parents with our hassle-free typing services.",
        icon: "Users",
        image_keyword: "family,happy",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1542037104857-ffbb0b9155fb?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "File Opening & Assessment",
            "Wife & Children Visa",
            "Parents Sponsorship",
            "Visa Stamping Application",
            "Status Change (In-Country)",
            "UID Merge / Unification",
            "Hold Family Visa",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Sponsor Passport, Visa & EID",
                "Salary Certificate / Labor Contract",
                "Tenancy Contract (Ejari)",
                "Marriage Certificate (Attested)",
                "Birth Certificate for Children",
            ],
            processing_time: "2 - 3 Working Days",
            additional_info: Some("Minimum salary of AED 4,000 required for sponsorship."),
        }),
        kind: SlideKind::Kids,
    },
    ServiceItem {
        id: "tourist-visa",
        title: "Tourist & Visit Visa",
        description: "Explore the UAE. We provide fast-track tourist visas for all nationalities.",
        icon: "MapPin",
        image_keyword: "travel,tourism",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1597659840241-37e2b9c2f55f?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "30 Days Single/Multiple",
            "60 Days Single/Multiple",
            "90 Days Visit Visa",
            "Airport-to-Airport Change",
            "Inside Country Extension",
            "Travel Insurance Included",
            "Dubai & Abu Dhabi Visas",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Clear Passport Copy (6 Months Validity)",
                "Passport Size Photo",
                "Guarantor Details (If applicable)",
            ],
            processing_time: "12 - 24 Hours",
            additional_info: Some("Processing time may vary for certain nationalities."),
        }),
        kind: SlideKind::Standard,
    },
    // --- Travel & medical ---
    ServiceItem {
        id: "medical-typing",
        title: "Medical Application",
        description: "Official typing center for DOH and MOH medical fitness applications.",
        icon: "Activity",
        image_keyword: "medical,doctor",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1631217868264-e5b90bb7e133?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "DOH Abu Dhabi Screening",
            "MOH Medical Application",
            "Visa Renewal Screening",
            "New Visa Screening",
            "VIP Fast Track Service",
            "Occupational Health Card",
            "Hepatitis B Vaccination Info",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Passport Copy",
                "Visa Copy / Offer Letter",
                "2 Passport Size Photos",
                "Emirates ID (If Renewal)",
            ],
            processing_time: "Instant Typing",
            additional_info: Some("Results typically available within 24-48 hours via SMS."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "flights",
        title: "Flights & Travel",
        description: "Best deals on air tickets and worldwide travel packages.",
        icon: "Plane",
        image_keyword: "airplane,airport",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1436491865332-7a61a109cc05?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "International Air Tickets",
            "Worldwide Tourist Visas",
            "Schengen / USA / UK Visa Assist",
            "Holiday Packages",
            "Hotel Booking",
            "Airport Transfers",
            "Ok To Board (OTB)",
        ],
        details: Some(ServiceDetails {
            requirements: &["Passport Copy", "Travel Dates", "Destination Details", "Visa (If applicable)"],
            processing_time: "Instant Booking",
            additional_info: Some("Prices subject to availability at time of booking."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "embassy-services",
        title: "Embassies & Consulates",
        description: "Assistance with passport renewal and consular services for various countries.",
        icon: "Globe",
        image_keyword: "flag,diplomacy",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1529108190281-9a4f620bc2d8?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Passport Renewal (India, Philippines, etc.)",
            "Outpass / Emergency Certificate",
            "NOC Issuance",
            "Birth Registration",
            "Affidavits & Attestation",
            "Appointment Scheduling",
        ],
        details: Some(ServiceDetails {
            requirements: &["Current Passport Copy", "Visa Copy", "Passport Photos", "Application Form"],
            processing_time: "Varies by Embassy",
            additional_info: Some("We assist with online forms and appointment booking."),
        }),
        kind: SlideKind::Standard,
    },
    // --- Corporate & business ---
    ServiceItem {
        id: "business-setup",
        title: "Business Setup",
        description: "Start your dream company in UAE. We handle everything from license to office.",
        icon: "Briefcase",
        image_keyword: "office,meeting",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "New Trade License Issuance",
            "License Renewal",
            "LLC & Sole Establishment",
            "Local Sponsor Arrangement",
            "Office Space / Ejari",
            "VAT Registration",
            "Bank Account Assistance",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Passport Copies of Partners",
                "Proposed Trade Names",
                "Initial Approval Certificate",
                "Tenancy Contract (Ejari)",
                "MOA (Memorandum of Association)",
            ],
            processing_time: "3 - 5 Working Days",
            additional_info: Some("Timelines depend on DED approvals and activity type."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "pro-services",
        title: "PRO Services",
        description: "Corporate document clearing and government liaison services.",
        icon: "Cog",
        image_keyword: "documents,signing",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Company Immigration Card",
            "Quota Approval / Modification",
            "Investor Visa Processing",
            "Municipality Approvals",
            "Civil Defense Certification",
            "Economic Dept Updates",
            "Document Attestation",
        ],
        details: Some(ServiceDetails {
            requirements: &["Trade License Copy", "Immigration Card Copy", "Authorized Signatory Details"],
            processing_time: "Varies by Service",
            additional_info: Some("Monthly retainer packages available for companies."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "labor-services",
        title: "MOHRE & Labor",
        description: "Expert handling of Ministry of Human Resources & Emiratisation services.",
        icon: "Building",
        image_keyword: "worker,construction",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1504307651254-35680f356dfd?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "New Work Permit (Labor Card)",
            "Labor Contract Modification",
            "Cancellation (Inside/Outside)",
            "Domestic Worker Services",
            "Tadbeer Services",
            "Salary Complaints (WPS)",
            "Absconding Reports",
        ],
        details: Some(ServiceDetails {
            requirements: &["Company Trade License", "Employee Passport & Visa", "Photo", "E-Signature Card"],
            processing_time: "24 - 48 Hours",
            additional_info: Some("Company quota must be available for new permits."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "tax-services",
        title: "Tax & VAT Services",
        description: "Expert assistance with Corporate Tax registration and VAT filing compliance.",
        icon: "Calculator",
        image_keyword: "finance,calculator",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1554224155-6726b3ff858f?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Corporate Tax Registration",
            "VAT Registration (TRN)",
            "Quarterly VAT Filing",
            "Tax De-Registration",
            "Accounting & Bookkeeping",
            "Financial Audit Reports",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Trade License Copy",
                "MOA / Power of Attorney",
                "Passport & EID of Owners",
                "Financial Statements / Bank Records",
            ],
            processing_time: "3 - 5 Working Days",
            additional_info: Some("Penalties apply for late filing. Ensure timely submission."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "customs",
        title: "Customs Services",
        description: "Import/Export code registration and customs clearance documentation.",
        icon: "Ship",
        image_keyword: "shipping,cargo",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Import / Export Code Registration",
            "Customs Code Renewal",
            "Mirsal 2 Registration",
            "Goods Clearance Support",
            "Vehicle Clearance Certificate",
            "Inspection Booking",
        ],
        details: Some(ServiceDetails {
            requirements: &["Trade License Copy", "Passport & EID of Owner", "Office Tenancy Contract"],
            processing_time: "1 - 2 Working Days",
            additional_info: Some("Required for any trading business importing goods."),
        }),
        kind: SlideKind::Standard,
    },
    // --- Legal & documents ---
    ServiceItem {
        id: "translation",
        title: "Legal Translation",
        description: "Certified translation for official use in courts and ministries.",
        icon: "FileText",
        image_keyword: "documents,writing",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1450101499163-c8848c66ca85?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Legal Translation (Arabic/English)",
            "Birth & Marriage Certificates",
            "Driving License Translation",
            "MOFA Attestation",
            "Embassy Attestation",
            "Power of Attorney",
            "Educational Certificates",
        ],
        details: Some(ServiceDetails {
            requirements: &["Original Document", "Passport Copy (For name verification)"],
            processing_time: "1 - 2 Days",
            additional_info: Some("Attestation requires stamps from originating country."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "attestation",
        title: "Certificate Attestation",
        description: "Global attestation services for educational and personal documents.",
        icon: "Stamp",
        image_keyword: "stamp,paper",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1554224155-1696413565d3?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Degree / Diploma Attestation",
            "Marriage / Birth Certificate",
            "MOFA UAE Attestation",
            "Embassy Attestation (UAE/Home Country)",
            "Apostille Services",
            "Translation & Notary",
        ],
        details: Some(ServiceDetails {
            requirements: &["Original Certificate", "Passport Copy", "Visa Copy"],
            processing_time: "3 - 7 Working Days",
            additional_info: Some("Courier pickup and delivery available."),
        }),
        kind: SlideKind::Standard,
    },
    // --- Personal, housing & vehicle ---
    ServiceItem {
        id: "traffic-services",
        title: "Traffic & Vehicle Services",
        description: "Comprehensive solutions for vehicle licensing, driving licenses, and fines.",
        icon: "Car",
        image_keyword: "car,traffic",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1449965408869-eaa3f722e40d?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Vehicle Registration Renewal",
            "Driving License Renewal",
            "Ownership Transfer",
            "Export Certificate",
            "Lost Plate Number",
            "Traffic File Opening",
            "Fine Payment & Clearance",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Emirates ID",
                "Vehicle Mulkiya (Registration Card)",
                "Vehicle Insurance Policy",
                "Eye Test Result (For License Renewal)",
            ],
            processing_time: "Instant Service",
            additional_info: Some("Vehicle inspection (Passing) required for registration renewal."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "insurance",
        title: "Insurance Services",
        description: "Protect yourself and your assets with our range of insurance partners.",
        icon: "Shield",
        image_keyword: "shield,protection",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Health Insurance (Daman/Thiqa)",
            "Vehicle Insurance (Comprehensive/3rd Party)",
            "Travel Insurance (Covid Cover)",
            "Family Medical Insurance",
            "Workers Compensation",
            "Property Insurance",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Emirates ID / Passport Copy",
                "Visa Copy",
                "Vehicle Registration (For Car Insurance)",
            ],
            processing_time: "1 Hour",
            additional_info: Some("We compare quotes from multiple providers."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "ejari-services",
        title: "Ejari & Housing",
        description: "Official registration and management of tenancy contracts in the UAE.",
        icon: "Key",
        image_keyword: "house,keys",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Ejari Registration",
            "Tenancy Contract Attestation",
            "Contract Cancellation",
            "Title Deed Updates",
            "Move-in Permits",
            "Property Management Assist",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Tenant Passport & Visa Copy",
                "Emirates ID Copy",
                "Landlord Passport/ID Copy",
                "Title Deed Copy",
                "DEWA Bill (Recent)",
            ],
            processing_time: "Instant - 24 Hours",
            additional_info: Some("Required for visa renewal and family sponsorship."),
        }),
        kind: SlideKind::Standard,
    },
    ServiceItem {
        id: "police-clearance",
        title: "Police Clearance",
        description: "Good Conduct Certificates for employment, immigration, or visa purposes.",
        icon: "Badge",
        image_keyword: "security,police",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1555529733-14637d7a4563?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[
            "Good Conduct Certificate (PCC)",
            "Certificate for Employment",
            "Certificate for Immigration",
            "Lost Item Certificates",
            "Traffic Accident Reports",
            "Fingerprint Services",
        ],
        details: Some(ServiceDetails {
            requirements: &[
                "Emirates ID (Active)",
                "Active UAE Mobile Number (Linked to EID)",
                "Email Address",
            ],
            processing_time: "24 - 48 Hours",
            additional_info: Some("Issued via MOI or Dubai Police app."),
        }),
        kind: SlideKind::Standard,
    },
    // --- Footer slides ---
    ServiceItem {
        id: "partners",
        title: "Government Partners",
        description: "Official Abu Dhabi Government Services",
        icon: "Globe",
        image_keyword: "abudhabi,government",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1599373672049-756d11f75745?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[],
        details: None,
        kind: SlideKind::Partners,
    },
    ServiceItem {
        id: "reviews",
        title: "Customer Stories",
        description: "What our clients say about us",
        icon: "Heart",
        image_keyword: "handshake,smile",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1521737604893-d14cc237f11d?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[],
        details: None,
        kind: SlideKind::Reviews,
    },
    ServiceItem {
        id: "contact",
        title: "Visit Us",
        description: "We are ready to help you",
        icon: "Phone",
        image_keyword: "map,store",
        custom_image: None,
        background: unsplash("https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1920&auto=format&fit=crop"),
        video_url: None,
        features: &[],
        details: None,
        kind: SlideKind::Contact,
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Mohammed Al Futtaim",
        role: "Business Owner",
        text: "Excellent Typing processed my company trade license renewal in record time. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Sarah Jenkins",
        role: "Teacher",
        text: "The Golden Visa process was so smooth. They handled all the attestations and documents perfectly.",
        rating: 5,
    },
    Testimonial {
        name: "Rajesh Kumar",
        role: "Engineer",
        text: "Best service for family visa sponsorship. The staff is very knowledgeable about the new rules.",
        rating: 5,
    },
    Testimonial {
        name: "Elena Petrova",
        role: "Tourist",
        text: "Got my 90-day visit visa approved within 4 hours. Super fast and reliable!",
        rating: 5,
    },
];

pub static PARTNERS: &[Partner] = &[
    Partner { name: "TAMM", sub: "Abu Dhabi Govt" },
    Partner { name: "ICP", sub: "Federal Identity" },
    Partner { name: "MOHRE", sub: "Labor Ministry" },
    Partner { name: "AD Judicial", sub: "Judicial Dept" },
    Partner { name: "ADDED", sub: "Economic Dept" },
    Partner { name: "DOH", sub: "Dept of Health" },
    Partner { name: "AD Police", sub: "Abu Dhabi Police" },
    Partner { name: "MOFA", sub: "Foreign Affairs" },
    Partner { name: "FTA", sub: "Tax Authority" },
    Partner { name: "Etisalat", sub: "Telecom" },
    Partner { name: "Du", sub: "Telecom" },
    Partner { name: "ADCB", sub: "Banking" },
    Partner { name: "FAB", sub: "Banking" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
        assert_eq!(SERVICES.len(), 22);
    }

    #[test]
    fn find_returns_entry_by_id() {
        let item = find("golden-visa").unwrap();
        assert_eq!(item.kind, SlideKind::Golden);
        assert!(find("does-not-exist").is_none());
    }

    #[test]
    fn unknown_tag_is_standard() {
        assert_eq!(SlideKind::from_tag("reviews"), SlideKind::Reviews);
        assert_eq!(SlideKind::from_tag("carousel"), SlideKind::Standard);
        assert_eq!(SlideKind::from_tag(""), SlideKind::Standard);
    }

    #[test]
    fn tags_round_trip_through_from_tag() {
        for item in SERVICES {
            assert_eq!(SlideKind::from_tag(item.kind.tag()), item.kind);
        }
    }
}
