// src/domain/persona.rs

/// The visitor archetypes that get their own landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Homeowner,
    MortgageCompany,
    RealEstateAgent,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Headline copy for the hero and the closing call to action.
pub struct LandingCopy {
    pub page_title: &'static str,
    pub hero_title: &'static str,
    pub hero_description: &'static str,
    pub hero_cta: &'static str,
    pub cta_title: &'static str,
    pub cta_description: &'static str,
    pub cta_text: &'static str,
}

impl Persona {
    pub const ALL: [Persona; 3] = [
        Persona::Homeowner,
        Persona::MortgageCompany,
        Persona::RealEstateAgent,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Persona::Homeowner => "homeowner",
            Persona::MortgageCompany => "mortgage-company",
            Persona::RealEstateAgent => "real-estate-agent",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn landing(self) -> &'static LandingCopy {
        match self {
            Persona::Homeowner => &HOMEOWNER_LANDING,
            Persona::MortgageCompany => &MORTGAGE_LANDING,
            Persona::RealEstateAgent => &AGENT_LANDING,
        }
    }

    pub fn features(self) -> &'static [Feature] {
        match self {
            Persona::Homeowner => &HOMEOWNER_FEATURES,
            Persona::MortgageCompany => &MORTGAGE_FEATURES,
            Persona::RealEstateAgent => &AGENT_FEATURES,
        }
    }

    pub fn testimonials(self) -> &'static [Testimonial] {
        match self {
            Persona::Homeowner => &HOMEOWNER_TESTIMONIALS,
            Persona::MortgageCompany => &MORTGAGE_TESTIMONIALS,
            Persona::RealEstateAgent => &AGENT_TESTIMONIALS,
        }
    }

    pub fn steps(self) -> &'static [Step] {
        match self {
            Persona::Homeowner => &HOMEOWNER_STEPS,
            Persona::MortgageCompany => &MORTGAGE_STEPS,
            Persona::RealEstateAgent => &AGENT_STEPS,
        }
    }

    pub fn faqs(self) -> &'static [Faq] {
        match self {
            Persona::Homeowner => &HOMEOWNER_FAQS,
            Persona::MortgageCompany => &MORTGAGE_FAQS,
            Persona::RealEstateAgent => &AGENT_FAQS,
        }
    }
}

// ---------- landing copy ----------

static HOMEOWNER_LANDING: LandingCopy = LandingCopy {
    page_title: "MorTru for Homeowners",
    hero_title: "Find Your Dream Home's True Value",
    hero_description: "MorTru provides homeowners with accurate, transparent, and comprehensive real estate data to make informed decisions about buying or selling.",
    hero_cta: "Start Your Home Search",
    cta_title: "Ready to Discover Your Home's True Value?",
    cta_description: "Join thousands of satisfied homeowners who have found their ideal homes using MorTru.",
    cta_text: "Get Your Home Valuation",
};

static MORTGAGE_LANDING: LandingCopy = LandingCopy {
    page_title: "MorTru for Mortgage Companies",
    hero_title: "Empower Your Mortgage Decisions",
    hero_description: "MorTru provides mortgage companies with accurate, real-time property data and market insights to streamline lending processes and reduce risk.",
    hero_cta: "Start Your Free Trial",
    cta_title: "Ready to Transform Your Mortgage Business?",
    cta_description: "Join leading mortgage companies who trust MorTru for accurate property valuations and market insights.",
    cta_text: "Schedule a Demo",
};

static AGENT_LANDING: LandingCopy = LandingCopy {
    page_title: "MorTru for Real Estate Agents",
    hero_title: "Elevate Your Real Estate Business",
    hero_description: "MorTru equips real estate agents with powerful tools and insights to provide unparalleled service to their clients and close more deals.",
    hero_cta: "Boost Your Listings",
    cta_title: "Ready to Become a Top-Performing Agent?",
    cta_description: "Join successful real estate agents who use MorTru to stay ahead of the market and exceed client expectations.",
    cta_text: "Start Your Free Trial",
};

// ---------- features ----------

static HOMEOWNER_FEATURES: [Feature; 3] = [
    Feature {
        icon: "home",
        title: "Comprehensive Listings",
        description: "Access the most up-to-date and detailed property listings in your area.",
    },
    Feature {
        icon: "trending-up",
        title: "Market Insights",
        description: "Get real-time market trends and predictive analytics to make informed decisions.",
    },
    Feature {
        icon: "shield",
        title: "Verified Information",
        description: "Trust in our rigorous verification process for accurate property details.",
    },
];

static MORTGAGE_FEATURES: [Feature; 3] = [
    Feature {
        icon: "chart-bar",
        title: "Risk Assessment Tools",
        description: "Utilize advanced analytics for accurate property valuation and risk assessment.",
    },
    Feature {
        icon: "trending-up",
        title: "Market Forecasts",
        description: "Access predictive models to anticipate market trends and adjust lending strategies.",
    },
    Feature {
        icon: "clock",
        title: "Streamlined Processes",
        description: "Automate property research and valuation to speed up loan approvals.",
    },
];

static AGENT_FEATURES: [Feature; 3] = [
    Feature {
        icon: "users",
        title: "Client Matching",
        description: "Use AI-powered tools to match clients with their perfect properties.",
    },
    Feature {
        icon: "trending-up",
        title: "Competitive Analysis",
        description: "Stay ahead with real-time market data and competitor insights.",
    },
    Feature {
        icon: "home",
        title: "Virtual Tours",
        description: "Offer immersive virtual property tours to save time and impress clients.",
    },
];

// ---------- testimonials ----------

static HOMEOWNER_TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "MorTru helped me find my dream home with its accurate and detailed listings.",
        author: "Sarah Johnson",
        role: "Homeowner",
    },
    Testimonial {
        quote: "The market insights provided by MorTru gave me confidence in my home purchase decision.",
        author: "Michael Chen",
        role: "First-time Buyer",
    },
    Testimonial {
        quote: "I sold my house faster and for a better price thanks to MorTru's valuation tools.",
        author: "Emily Rodriguez",
        role: "Home Seller",
    },
];

static MORTGAGE_TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "MorTru's risk assessment tools have significantly improved our loan approval process.",
        author: "David Thompson",
        role: "Mortgage Underwriter",
    },
    Testimonial {
        quote: "The market forecasts provided by MorTru help us stay ahead of market trends.",
        author: "Lisa Patel",
        role: "Mortgage Analyst",
    },
    Testimonial {
        quote: "Our loan officers love the streamlined property research capabilities of MorTru.",
        author: "Robert Johnson",
        role: "Mortgage Company CEO",
    },
];

static AGENT_TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "MorTru's client matching feature has helped me close more deals than ever before.",
        author: "Jessica Lee",
        role: "Real Estate Agent",
    },
    Testimonial {
        quote: "The competitive analysis tools give me a significant edge in my market.",
        author: "Mark Williams",
        role: "Senior Real Estate Agent",
    },
    Testimonial {
        quote: "Virtual tours powered by MorTru have revolutionized how I showcase properties.",
        author: "Sophia Garcia",
        role: "Luxury Real Estate Specialist",
    },
];

// ---------- how it works ----------

static HOMEOWNER_STEPS: [Step; 3] = [
    Step {
        icon: "search",
        title: "Search Properties",
        description: "Use our advanced filters to find properties that match your criteria.",
    },
    Step {
        icon: "bar-chart",
        title: "Analyze Market Data",
        description: "Review comprehensive market insights and trends for informed decision-making.",
    },
    Step {
        icon: "home",
        title: "Make Your Move",
        description: "Connect with agents or sellers to take the next step in your real estate journey.",
    },
];

static MORTGAGE_STEPS: [Step; 3] = [
    Step {
        icon: "calculator",
        title: "Assess Property Value",
        description: "Utilize our advanced valuation tools for accurate property assessments.",
    },
    Step {
        icon: "bar-chart",
        title: "Analyze Risk",
        description: "Use our comprehensive risk assessment models to evaluate loan applications.",
    },
    Step {
        icon: "file-check",
        title: "Streamline Approvals",
        description: "Expedite the loan approval process with our automated verification systems.",
    },
];

static AGENT_STEPS: [Step; 3] = [
    Step {
        icon: "search",
        title: "Find Perfect Matches",
        description: "Use our AI-powered tools to match clients with their ideal properties.",
    },
    Step {
        icon: "bar-chart",
        title: "Analyze Market Trends",
        description: "Stay ahead of the competition with real-time market data and insights.",
    },
    Step {
        icon: "users",
        title: "Manage Client Relationships",
        description: "Use our CRM tools to nurture leads and maintain strong client relationships.",
    },
];

// ---------- faqs ----------

static HOMEOWNER_FAQS: [Faq; 5] = [
    Faq {
        question: "How accurate is MorTru's property data?",
        answer: "MorTru's property data is highly accurate, updated in real-time, and verified through multiple sources. We use advanced algorithms and human oversight to ensure the highest level of accuracy in the industry.",
    },
    Faq {
        question: "Can I use MorTru on my mobile device?",
        answer: "Yes, MorTru is fully responsive and optimized for mobile devices. You can access all features and functionalities on your smartphone or tablet, making it easy to search for properties on the go.",
    },
    Faq {
        question: "How often is the market data updated?",
        answer: "Our market data is updated in real-time. As soon as new information becomes available, it's processed and integrated into our system, ensuring you always have access to the most current market trends and property details.",
    },
    Faq {
        question: "Can MorTru help me estimate the value of my current home?",
        answer: "MorTru provides advanced valuation tools that take into account recent sales, market trends, and property characteristics to give you an accurate estimate of your home's current value.",
    },
    Faq {
        question: "Is MorTru available internationally?",
        answer: "Currently, MorTru is available in select markets, with plans for international expansion. We're continuously working on adding new regions to our coverage. Check our website for the most up-to-date information on available locations.",
    },
];

static MORTGAGE_FAQS: [Faq; 5] = [
    Faq {
        question: "How does MorTru's risk assessment tool work?",
        answer: "MorTru's risk assessment tool uses advanced machine learning algorithms to analyze property data, market trends, and economic indicators. It provides a comprehensive risk score for each property, helping you make informed lending decisions.",
    },
    Faq {
        question: "Can MorTru integrate with our existing loan origination system?",
        answer: "Yes, MorTru is designed to integrate seamlessly with most popular loan origination systems. Our team can work with you to ensure a smooth integration process, minimizing disruption to your existing workflows.",
    },
    Faq {
        question: "How often is the market forecast data updated?",
        answer: "Our market forecast data is updated daily, incorporating the latest economic indicators, property transactions, and market trends. This ensures you always have access to the most current and accurate predictions.",
    },
    Faq {
        question: "Does MorTru offer custom reporting features?",
        answer: "MorTru provides a range of customizable reporting options. You can create tailored reports that focus on the specific metrics and insights most relevant to your business needs.",
    },
    Faq {
        question: "What kind of support does MorTru offer for mortgage companies?",
        answer: "MorTru offers dedicated support for mortgage companies, including personalized onboarding, ongoing training sessions, and a specialized support team familiar with the unique needs of the mortgage industry.",
    },
];

static AGENT_FAQS: [Faq; 5] = [
    Faq {
        question: "How can MorTru help me generate more leads?",
        answer: "MorTru offers advanced lead generation tools that use AI to identify potential buyers and sellers in your area. Our platform also provides insights on the best times and methods to reach out to these leads, increasing your conversion rates.",
    },
    Faq {
        question: "Can I create custom property reports for my clients?",
        answer: "Yes, MorTru allows you to create professional, branded property reports for your clients. These reports can include detailed property information, market comparisons, and trend analyses, helping you provide more value to your clients.",
    },
    Faq {
        question: "How does MorTru's virtual tour feature work?",
        answer: "MorTru's virtual tour feature allows you to create immersive 3D tours of properties. You can easily upload photos or 360-degree videos, and our system will generate an interactive virtual tour that you can share with clients or embed on your website.",
    },
    Faq {
        question: "Can MorTru help me manage my client relationships?",
        answer: "MorTru includes a built-in CRM system designed specifically for real estate agents. It helps you track client interactions, set reminders for follow-ups, and even suggests personalized property recommendations for each client.",
    },
    Faq {
        question: "How often is the competitive analysis data updated?",
        answer: "Our competitive analysis data is updated in real-time. This includes new listings, price changes, and sales in your area. You'll always have the most current information to help you and your clients make informed decisions.",
    },
];
