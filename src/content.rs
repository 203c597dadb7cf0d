//! Static copy shown across the site.

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

pub struct Domain {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
    pub projects: &'static [Project],
}

pub struct Program {
    pub title: &'static str,
    pub mode: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub mentorship: &'static str,
    pub projects: &'static str,
}

pub struct PricingPlan {
    pub title: &'static str,
    pub price: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Internship Programs",
        description: "Structured 4-8 week programs providing industry-guided experience to bridge the skill gap.",
        icon: "💼",
    },
    Service {
        title: "Mobile App Development",
        description: "High-performance cross-platform mobile applications built with Flutter and React Native for Android and iOS.",
        icon: "📱",
    },
    Service {
        title: "Skill Development",
        description: "Curriculum designed to enhance technical proficiency and professional soft skills.",
        icon: "💡",
    },
    Service {
        title: "Project-Based Learning",
        description: "Hands-on experience with mini and final year projects under expert mentorship.",
        icon: "🎯",
    },
    Service {
        title: "Research & Projects Support",
        description: "End-to-end guidance for research papers (IEEE/Scopus including writing & publishing) and academic projects with documentation.",
        icon: "📄",
    },
    Service {
        title: "Career Guidance",
        description: "Personalized career counseling, resume building, interview preparation, and placement assistance to help you land your dream job.",
        icon: "🧭",
    },
];

pub const DOMAINS: &[Domain] = &[
    Domain {
        id: "webdev",
        name: "Web Development",
        description: "Building responsive and scalable web applications using modern frameworks.",
        topics: &["HTML5/CSS3", "JavaScript (ES6+)", "React & Next.js", "Tailwind CSS"],
        projects: &[
            Project {
                title: "E-Commerce Platform",
                description: "Full-featured shopping cart, payment integration, and admin dashboard.",
                tags: &["React", "Node.js", "Stripe"],
                image: "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&w=800&q=80",
            },
            Project {
                title: "Corporate Portfolio",
                description: "High-performance company website with CMS integration.",
                tags: &["Next.js", "Tailwind", "Sanity"],
                image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
            },
            Project {
                title: "Task Management App",
                description: "Real-time collaboration tool with drag-and-drop features.",
                tags: &["React", "Firebase", "DnD"],
                image: "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?auto=format&fit=crop&w=800&q=80",
            },
        ],
    },
    Domain {
        id: "python",
        name: "Python Programming",
        description: "Mastering the versatility of Python for automation and scripting.",
        topics: &["Core Python", "Data Structures", "Automation", "API Development"],
        projects: &[
            Project {
                title: "Data Scraper Bot",
                description: "Automated extraction of data from multiple websites.",
                tags: &["Python", "Selenium", "BeautifulSoup"],
                image: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?auto=format&fit=crop&w=800&q=80",
            },
            Project {
                title: "File Organizer",
                description: "Script to auto-organize system files by type and date.",
                tags: &["Python", "OS Module"],
                image: "https://images.unsplash.com/photo-1629654297299-c8506221ca97?auto=format&fit=crop&w=800&q=80",
            },
        ],
    },
    Domain {
        id: "datascience",
        name: "Data Science",
        description: "Introductory exploration of data analysis and visualization techniques.",
        topics: &["NumPy & Pandas", "Data Visualization", "Statistical Analysis", "SQL Basics"],
        projects: &[
            Project {
                title: "Sales Dashboard",
                description: "Interactive visualization of retail sales data.",
                tags: &["Python", "Pandas", "Matplotlib"],
                image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=800&q=80",
            },
            Project {
                title: "Customer Segmentation",
                description: "Clustering analysis to identify customer groups.",
                tags: &["Scikit-learn", "K-Means"],
                image: "https://images.unsplash.com/photo-1543269865-cbf427effbad?auto=format&fit=crop&w=800&q=80",
            },
        ],
    },
    Domain {
        id: "aiml",
        name: "AI & Machine Learning",
        description: "Foundational concepts of artificial intelligence and predictive modeling.",
        topics: &["Supervised Learning", "Neural Networks Intro", "Model Evaluation", "ML Pipeline"],
        projects: &[
            Project {
                title: "Image Classifier",
                description: "Convolutional Neural Network to identify objects in images.",
                tags: &["TensorFlow", "CNN", "Keras"],
                image: "https://images.unsplash.com/photo-1527430253228-e93688616381?auto=format&fit=crop&w=800&q=80",
            },
            Project {
                title: "Price Predictor",
                description: "Regression model to predict real estate prices.",
                tags: &["Python", "Scikit-learn"],
                image: "https://images.unsplash.com/photo-1460472178825-e5240623afd5?auto=format&fit=crop&w=800&q=80",
            },
        ],
    },
    Domain {
        id: "uiux",
        name: "UI/UX Design",
        description: "Designing user-centric interfaces and understanding interaction flows.",
        topics: &["Wireframing", "Figma Fundamentals", "Design Thinking", "Prototyping"],
        projects: &[
            Project {
                title: "Mobile App Redesign",
                description: "Modern UI overhaul for a fintech application.",
                tags: &["Figma", "Prototyping"],
                image: "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e?auto=format&fit=crop&w=800&q=80",
            },
            Project {
                title: "Design System",
                description: "Comprehensive component library and style guide.",
                tags: &["Figma", "Auto Layout"],
                image: "https://images.unsplash.com/photo-1561070791-2526d30994b5?auto=format&fit=crop&w=800&q=80",
            },
        ],
    },
    Domain {
        id: "paperwriting",
        name: "Research & Writing",
        description: "Professional assistance in academic and research paper writing.",
        topics: &["Research Papers", "Technical Writing", "Literature Review", "Citations"],
        projects: &[
            Project {
                title: "IEEE Conference Paper",
                description: "Drafting and formatting for international conference submission.",
                tags: &["LaTeX", "Research"],
                image: "https://images.unsplash.com/photo-1455390582262-044cdead277a?auto=format&fit=crop&w=800&q=80",
            },
            Project {
                title: "Technical Documentation",
                description: "API references and user manuals for software products.",
                tags: &["Markdown", "Technical Writing"],
                image: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?auto=format&fit=crop&w=800&q=80",
            },
        ],
    },
];

pub const HOME_RESULTS: &[Project] = &[
    Project {
        title: "Smart Campus ERP",
        description: "Comprehensive management system for educational institutions streamlining attendance, grades, and fee collection.",
        tags: &["React", "Node.js", "PostgreSQL"],
        image: "https://images.unsplash.com/photo-1531403009284-440f080d1e12?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "HealthTech Analytics",
        description: "AI-driven platform identifying patient risk factors using historical health data.",
        tags: &["Python", "ML", "FastAPI"],
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "E-Commerce Superapp",
        description: "Multi-vendor marketplace with real-time inventory and logistics tracking.",
        tags: &["Next.js", "Supabase", "Stripe"],
        image: "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&w=1200&q=80",
    },
];

pub const TECH_STACK: &[&str] = &[
    "Next.js", "React", "TypeScript", "Python", "Node.js", "Tailwind", "Supabase", "Docker", "Git", "Figma",
];

pub const PROGRAMS: &[Program] = &[
    Program {
        title: "Python Full Stack Development",
        mode: "Virtual",
        duration: "6-8 Weeks",
        description: "Master end-to-end Python development with modern frameworks and deployment strategies",
        skills: &["Python", "Django/Flask", "PostgreSQL", "REST APIs", "Docker", "AWS Deployment"],
        mentorship: "1:1 Personal Mentorship",
        projects: "2 Real-world Projects",
    },
    Program {
        title: "Web Development with Python & Flask",
        mode: "Virtual",
        duration: "4-6 Weeks",
        description: "Build dynamic web applications using Python and Flask framework with best practices",
        skills: &["Python", "Flask", "HTML/CSS/JavaScript", "SQLAlchemy", "Jinja2", "API Development"],
        mentorship: "1:1 Personal Mentorship",
        projects: "1 Capstone Project",
    },
    Program {
        title: "Virtual Internship Program",
        mode: "Virtual",
        duration: "4-8 Weeks",
        description: "Comprehensive virtual internship experience with flexible learning schedule and remote collaboration tools",
        skills: &["Remote Collaboration", "Digital Communication", "Project Management", "Time Management", "Virtual Teamwork", "Documentation"],
        mentorship: "1:1 Personal Mentorship",
        projects: "2 Virtual Team Projects",
    },
];

pub const INTERNSHIP_PRINCIPLES: &[&str] = &[
    "No exploitation of student resources",
    "Clear learning outcomes for every week",
    "Structured assessment and feedback loops",
    "Industry-relevant tech stack focus",
];

pub const METHODOLOGY: &[Step] = &[
    Step {
        title: "Hands-On Approach",
        description: "Learning by doing. We move beyond theory to implement real-world solutions through interactive sessions.",
    },
    Step {
        title: "Weekly Evaluations",
        description: "Consistent monitoring through weekly tasks ensures students stay on track and receive timely feedback.",
    },
    Step {
        title: "Project-Based Assessment",
        description: "Final certification is based on the successful delivery of a practical project that showcases acquired skills.",
    },
];

pub const PROCESS_STEPS: &[Step] = &[
    Step { title: "Discovery", description: "Understanding Requirements" },
    Step { title: "Planning", description: "Architecture & Roadmap" },
    Step { title: "Design", description: "UI/UX & Prototyping" },
    Step { title: "Development", description: "Coding & Integration" },
    Step { title: "Testing", description: "QA & Performance" },
    Step { title: "Deployment", description: "Launch & Support" },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        title: "Basic Plan",
        price: "₹9,999",
        tagline: "Best for starters",
        features: &[
            "Up to 5 Pages",
            "Mobile Responsive",
            "Contact Form",
            "Social Media Integration",
            "Basic UI Design",
            "6 months free Hosting",
            "Basic SEO Setup",
            "15 Days free Support",
        ],
        recommended: false,
    },
    PricingPlan {
        title: "Intermediate Plan",
        price: "₹17,999",
        tagline: "Best for small businesses & Medium weight website",
        features: &[
            "Up to 10 Pages",
            "CMS Integration(Admin Panel)",
            "Custom UI/UX Design",
            "Advanced SEO",
            "Analytics Setup",
            "WhatsApp Chat integration",
            "6 months free Hosting",
            "1 Month free Domain",
            "1 Month free Maintenance Support",
            "45 Days free Support",
        ],
        recommended: true,
    },
    PricingPlan {
        title: "Pro Plan",
        price: "₹24,999",
        tagline: "Best for E-commerce & Advanced Features",
        features: &[
            "More than 10 pages",
            "Product management",
            "Payment Gateway Integration",
            "Admin Dashboard",
            "Order Management",
            "Feedback & Reviews",
            "Email notifications",
            "6 months free Hosting",
            "6 Months free Domain",
            "3 Months free Maintenance Support",
            "6 Months free Support",
        ],
        recommended: false,
    },
];

pub const FAQ_DATA: &[Faq] = &[
    Faq {
        question: "How do I apply for an internship?",
        answer: "You can apply directly through our Internship page by clicking 'Apply Now' on your preferred domain tracks.",
    },
    Faq {
        question: "Do you provide Scopus/IEEE publication support?",
        answer: "Yes, we provide end-to-end guidance for research writing, formatting as per Scopus/IEEE standards, and finding suitable publishers.",
    },
    Faq {
        question: "Can I get a custom project for my business?",
        answer: "Absolutely! We specialize in custom web applications, mobile apps, and AI solutions tailored to your specific business requirements.",
    },
    Faq {
        question: "Is the training online or offline?",
        answer: "We offer flexible modes including online instructor-led sessions and hybrid models depending on the program.",
    },
];

pub fn find_domain(id: &str) -> Option<&'static Domain> {
    DOMAINS.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn domain_ids_are_unique_and_resolvable() {
        let ids: HashSet<_> = DOMAINS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DOMAINS.len());
        assert_eq!(find_domain("aiml").map(|d| d.name), Some("AI & Machine Learning"));
        assert!(find_domain("cobol").is_none());
    }

    #[test]
    fn exactly_one_recommended_plan() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.recommended).count(), 1);
    }
}
