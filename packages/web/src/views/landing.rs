//! Public landing page: hero, stats, feature grid and the recruiter/student
//! split. Signed-in visitors never land here — the route guard forwards them
//! to their dashboard.

use dioxus::prelude::*;
use ui::components::{Button, ButtonSize, ButtonVariant, Card};
use ui::icons::{
    FaAward, FaBolt, FaBrain, FaBullseye, FaChartLine, FaGraduationCap, FaShieldHalved, FaUsers,
};
use ui::{Icon, ThemeToggle};

use crate::Route;

struct Feature {
    icon: Element,
    title: &'static str,
    description: &'static str,
}

struct Stat {
    icon: Element,
    number: &'static str,
    label: &'static str,
}

fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: rsx! { Icon { width: 22, height: 22, fill: "currentColor", icon: FaBrain } },
            title: "AI-Powered Analysis",
            description: "Machine learning models analyze resumes and interview performance with 95% accuracy",
        },
        Feature {
            icon: rsx! { Icon { width: 22, height: 22, fill: "currentColor", icon: FaUsers } },
            title: "Smart Candidate Ranking",
            description: "Automatically rank candidates based on job requirements, experience and skill matching",
        },
        Feature {
            icon: rsx! { Icon { width: 22, height: 22, fill: "currentColor", icon: FaGraduationCap } },
            title: "Mock Interview Training",
            description: "Practice with realistic AI interviews, get stress analysis, and improve your performance",
        },
        Feature {
            icon: rsx! { Icon { width: 22, height: 22, fill: "currentColor", icon: FaBolt } },
            title: "Lightning Fast Processing",
            description: "Process hundreds of resumes in minutes, not hours. Get results instantly",
        },
        Feature {
            icon: rsx! { Icon { width: 22, height: 22, fill: "currentColor", icon: FaShieldHalved } },
            title: "Enterprise Security",
            description: "Bank-grade security with end-to-end encryption and GDPR compliance",
        },
        Feature {
            icon: rsx! { Icon { width: 22, height: 22, fill: "currentColor", icon: FaChartLine } },
            title: "Performance Analytics",
            description: "Track hiring success rates and candidate performance with detailed analytics",
        },
    ]
}

fn stats() -> Vec<Stat> {
    vec![
        Stat {
            icon: rsx! { Icon { width: 18, height: 18, fill: "currentColor", icon: FaUsers } },
            number: "50K+",
            label: "Candidates Screened",
        },
        Stat {
            icon: rsx! { Icon { width: 18, height: 18, fill: "currentColor", icon: FaBullseye } },
            number: "95%",
            label: "Accuracy Rate",
        },
        Stat {
            icon: rsx! { Icon { width: 18, height: 18, fill: "currentColor", icon: FaBolt } },
            number: "80%",
            label: "Time Saved",
        },
        Stat {
            icon: rsx! { Icon { width: 18, height: 18, fill: "currentColor", icon: FaAward } },
            number: "500+",
            label: "Companies Trust Us",
        },
    ]
}

const RECRUITER_STEPS: [&str; 5] = [
    "Upload a job description",
    "Bulk upload candidate resumes",
    "AI analyzes and ranks every candidate",
    "Review match scores and insights",
    "Shortlist and contact top candidates",
];

const STUDENT_STEPS: [&str; 5] = [
    "Upload your resume and target role",
    "Start an AI-powered interview session",
    "Answer personalized interview questions",
    "Receive stress and performance analysis",
    "Use the feedback to improve and practice",
];

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "landing",

            header {
                class: "landing-topbar",
                div {
                    class: "landing-brand",
                    Icon { width: 22, height: 22, fill: "currentColor", icon: FaBrain }
                    span { "Mock'n-Hire" }
                }
                div {
                    class: "landing-topbar-actions",
                    ThemeToggle {}
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Sign In"
                    }
                }
            }

            section {
                class: "hero",
                span { class: "hero-badge", "AI-Powered Hiring Platform" }
                h1 { "Hire smarter. Interview better." }
                p {
                    class: "hero-copy",
                    "Mock'n-Hire screens resumes, ranks candidates and runs realistic "
                    "mock interviews, so recruiters find the right people faster and "
                    "candidates walk in prepared."
                }
                div {
                    class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Lg,
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Get Started"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Lg,
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Practice an Interview"
                    }
                }
            }

            section {
                class: "stats-row",
                for stat in stats() {
                    Card {
                        class: "stat-card",
                        span { class: "stat-icon", {stat.icon} }
                        span { class: "stat-number", "{stat.number}" }
                        span { class: "stat-label", "{stat.label}" }
                    }
                }
            }

            section {
                class: "features",
                h2 { "Everything hiring needs, in one place" }
                div {
                    class: "features-grid",
                    for feature in features() {
                        Card {
                            class: "feature-card",
                            span { class: "feature-icon", {feature.icon} }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }

            section {
                class: "how-it-works",
                h2 { "How it works" }
                div {
                    class: "how-grid",
                    Card {
                        class: "how-card",
                        div {
                            class: "how-card-header",
                            Icon { width: 20, height: 20, fill: "currentColor", icon: FaUsers }
                            h3 { "For Recruiters" }
                        }
                        ol {
                            for step in RECRUITER_STEPS {
                                li { "{step}" }
                            }
                        }
                    }
                    Card {
                        class: "how-card",
                        div {
                            class: "how-card-header",
                            Icon { width: 20, height: 20, fill: "currentColor", icon: FaGraduationCap }
                            h3 { "For Students" }
                        }
                        ol {
                            for step in STUDENT_STEPS {
                                li { "{step}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "landing-cta",
                Card {
                    class: "cta-card",
                    h2 { "Ready to change how you hire?" }
                    p { "Create a free account as a recruiter or a student and see it in action." }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Lg,
                        onclick: move |_| { nav.push(Route::Login {}); },
                        "Create Account"
                    }
                }
            }

            footer {
                class: "landing-footer",
                p { "Mock'n-Hire — AI Hiring Suite" }
            }
        }
    }
}
