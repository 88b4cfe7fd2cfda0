//! Static Indonesian market tables (2024-2025 snapshot).

use crate::insights::{
    Bootcamp, CompanyTier, FieldSalaries, GovernmentProgram, LearningResources, SalaryBand,
    SuccessStory, TechCity,
};

const fn band(min: u64, max: u64) -> SalaryBand {
    SalaryBand { min, max }
}

pub const SALARY_DATA: &[FieldSalaries] = &[
    FieldSalaries {
        field: "Artificial Intelligence",
        entry_level: band(8_000_000, 15_000_000),
        mid_level: band(15_000_000, 35_000_000),
        senior_level: band(35_000_000, 80_000_000),
        expert_level: band(80_000_000, 150_000_000),
    },
    FieldSalaries {
        field: "Data Science",
        entry_level: band(7_000_000, 12_000_000),
        mid_level: band(12_000_000, 25_000_000),
        senior_level: band(25_000_000, 60_000_000),
        expert_level: band(60_000_000, 120_000_000),
    },
    FieldSalaries {
        field: "Cybersecurity",
        entry_level: band(6_000_000, 10_000_000),
        mid_level: band(10_000_000, 20_000_000),
        senior_level: band(20_000_000, 50_000_000),
        expert_level: band(50_000_000, 100_000_000),
    },
    FieldSalaries {
        field: "Software Engineering",
        entry_level: band(6_000_000, 12_000_000),
        mid_level: band(12_000_000, 25_000_000),
        senior_level: band(25_000_000, 55_000_000),
        expert_level: band(55_000_000, 120_000_000),
    },
    FieldSalaries {
        field: "Product Management",
        entry_level: band(8_000_000, 15_000_000),
        mid_level: band(15_000_000, 30_000_000),
        senior_level: band(30_000_000, 65_000_000),
        expert_level: band(65_000_000, 130_000_000),
    },
    FieldSalaries {
        field: "UI/UX Design",
        entry_level: band(5_000_000, 10_000_000),
        mid_level: band(10_000_000, 20_000_000),
        senior_level: band(20_000_000, 45_000_000),
        expert_level: band(45_000_000, 85_000_000),
    },
];

pub const TECH_CITIES: &[TechCity] = &[
    TechCity {
        name: "Jakarta",
        companies: 150,
        avg_salary_multiplier: 1.0,
        remote_culture: "85%",
        description: "Pusat ekonomi digital Indonesia",
        cost_of_living_index: 1.0,
    },
    TechCity {
        name: "Bandung",
        companies: 80,
        avg_salary_multiplier: 0.8,
        remote_culture: "90%",
        description: "Silicon Valley Indonesia",
        cost_of_living_index: 0.7,
    },
    TechCity {
        name: "Surabaya",
        companies: 45,
        avg_salary_multiplier: 0.75,
        remote_culture: "70%",
        description: "Hub industri Jawa Timur",
        cost_of_living_index: 0.65,
    },
    TechCity {
        name: "Yogyakarta",
        companies: 35,
        avg_salary_multiplier: 0.7,
        remote_culture: "80%",
        description: "Pusat startup kreatif",
        cost_of_living_index: 0.6,
    },
    TechCity {
        name: "Bali",
        companies: 30,
        avg_salary_multiplier: 0.9,
        remote_culture: "95%",
        description: "Digital nomad paradise",
        cost_of_living_index: 0.8,
    },
];

pub const COMPANY_TIERS: &[CompanyTier] = &[
    CompanyTier {
        tier: "Unicorn",
        companies: &["Gojek", "Tokopedia", "Bukalapak", "Traveloka", "OVO"],
    },
    CompanyTier {
        tier: "Decacorn",
        companies: &["Shopee Indonesia", "Grab Indonesia"],
    },
    CompanyTier {
        tier: "Scale-up",
        companies: &[
            "Ajaib", "Xendit", "Midtrans", "Koinworks", "Stockbit", "Flip", "DANA",
        ],
    },
    CompanyTier {
        tier: "Multinational",
        companies: &[
            "Google Indonesia",
            "Microsoft Indonesia",
            "Amazon Web Services",
            "Meta Indonesia",
        ],
    },
    CompanyTier {
        tier: "Banks Digital",
        companies: &["Jenius", "Digibank", "Blu BCA", "Jago", "Seabank"],
    },
    CompanyTier {
        tier: "E-commerce",
        companies: &["Blibli", "Zalora", "Bhinneka", "JD.ID", "Lazada Indonesia"],
    },
];

pub const LEARNING_RESOURCES: LearningResources = LearningResources {
    bootcamps: &[
        Bootcamp {
            name: "Hacktiv8",
            focus: "Full-stack development, Data Science",
            duration: "3-6 bulan",
            price: "Rp 15-35 juta",
        },
        Bootcamp {
            name: "Purwadhika",
            focus: "Digital Technology School",
            duration: "3-4 bulan",
            price: "Rp 12-25 juta",
        },
        Bootcamp {
            name: "Algoritma",
            focus: "Data Science & AI",
            duration: "2-4 bulan",
            price: "Rp 8-20 juta",
        },
        Bootcamp {
            name: "Binar Academy",
            focus: "Software development",
            duration: "4-6 bulan",
            price: "Rp 10-30 juta",
        },
        Bootcamp {
            name: "Dicoding",
            focus: "Mobile & Web development",
            duration: "1-3 bulan",
            price: "Rp 2-8 juta",
        },
    ],
    universities: &[
        "Institut Teknologi Bandung (ITB)",
        "Universitas Indonesia (UI)",
        "Institut Teknologi Sepuluh Nopember (ITS)",
        "Universitas Gadjah Mada (UGM)",
        "Binus University",
        "Telkom University",
    ],
    communities: &[
        "Indonesia Android Kejar (IAK)",
        "JakartaJS",
        "Python Indonesia",
        "React Indonesia",
        "AI/ML Indonesia",
        "Women in Tech Indonesia",
    ],
};

pub const SUCCESS_STORIES: &[SuccessStory] = &[
    SuccessStory {
        name: "Andi Pratama",
        from_role: "Bank Teller",
        to_role: "Data Scientist at GoPang",
        duration_months: 10,
        training: "Algoritma Data Science + Coursera",
        salary_increase_pct: 300,
        story: "Dari teller bank dengan gaji Rp 4 juta menjadi Data Scientist dengan gaji Rp 15 juta di GoPang",
    },
    SuccessStory {
        name: "Sari Dewi",
        from_role: "Marketing Executive",
        to_role: "Product Manager at Sotoypedia",
        duration_months: 8,
        training: "Google PM Certificate + Hacktiv8",
        salary_increase_pct: 250,
        story: "Transisi dari marketing tradisional ke Product Manager tech dengan bantuan bootcamp lokal",
    },
    SuccessStory {
        name: "Budi Santoso",
        from_role: "Guru SMA",
        to_role: "Cybersecurity Analyst at ABC Digital",
        duration_months: 12,
        training: "Self-learning + Dicoding + CISSP",
        salary_increase_pct: 200,
        story: "Dari mengajar di sekolah menjadi cybersecurity professional di bank digital",
    },
];

pub const GOVERNMENT_PROGRAMS: &[GovernmentProgram] = &[
    GovernmentProgram {
        name: "Kartu Prakerja",
        description: "Program pelatihan dan sertifikasi gratis",
        focus: "Digital skills, programming, data analysis",
        budget: Some("Rp 3.5 juta per peserta"),
        coverage: None,
        categories: &[],
    },
    GovernmentProgram {
        name: "Digital Talent Scholarship",
        description: "Beasiswa dari Kemkominfo",
        focus: "AI, Cybersecurity, Big Data, Cloud Computing",
        budget: None,
        coverage: None,
        categories: &["Fresh Graduate", "Professional Development"],
    },
    GovernmentProgram {
        name: "Beasiswa LPDP",
        description: "Beasiswa pendidikan tinggi",
        focus: "Technology and Engineering",
        budget: None,
        coverage: Some("S2/S3 dalam dan luar negeri"),
        categories: &[],
    },
];

/// Finds a city by name, case-insensitively.
pub fn find_city(name: &str) -> Option<&'static TechCity> {
    TECH_CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}
