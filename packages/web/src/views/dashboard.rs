//! Role dashboards. The route guard guarantees the rendered role matches the
//! signed-in identity.

use dioxus::prelude::*;
use store::Role;
use ui::components::{BadgeStatus, Button, ButtonVariant, Card, StatusBadge};
use ui::icons::{FaChartLine, FaClock, FaFileLines, FaGraduationCap, FaMicrophone, FaUsers};
use ui::{use_auth, Icon};

#[component]
pub fn Dashboard(role: Role) -> Element {
    match role {
        Role::Recruiter => rsx! { RecruiterDashboard {} },
        Role::Student => rsx! { StudentDashboard {} },
    }
}

#[component]
fn RecruiterDashboard() -> Element {
    let auth = use_auth();
    let name = auth()
        .identity
        .map(|identity| identity.name)
        .unwrap_or_default();

    rsx! {
        div {
            class: "page dashboard",

            header {
                class: "page-header",
                h1 { "Welcome back, {name}" }
                p { "Screen resumes, rank candidates and review results." }
            }

            div {
                class: "stat-grid",
                Card {
                    class: "stat-card",
                    span { class: "stat-icon", Icon { width: 18, height: 18, fill: "currentColor", icon: FaFileLines } }
                    span { class: "stat-number", "0" }
                    span { class: "stat-label", "Active Screenings" }
                }
                Card {
                    class: "stat-card",
                    span { class: "stat-icon", Icon { width: 18, height: 18, fill: "currentColor", icon: FaUsers } }
                    span { class: "stat-number", "0" }
                    span { class: "stat-label", "Candidates Ranked" }
                }
                Card {
                    class: "stat-card",
                    span { class: "stat-icon", Icon { width: 18, height: 18, fill: "currentColor", icon: FaChartLine } }
                    span { class: "stat-number", "—" }
                    span { class: "stat-label", "Avg Match Score" }
                }
            }

            Card {
                class: "cta-card",
                h2 { "Start a new screening" }
                p { "Upload a job description and a batch of resumes to get a ranked shortlist." }
                Button {
                    variant: ButtonVariant::Primary,
                    "New Screening"
                }
            }

            Card {
                class: "list-card",
                div {
                    class: "list-card-header",
                    h2 { "Recent screenings" }
                    StatusBadge { status: BadgeStatus::Pending, "Nothing running" }
                }
                p {
                    class: "empty-state",
                    "Screenings you start will show up here with their ranking progress."
                }
            }
        }
    }
}

#[component]
fn StudentDashboard() -> Element {
    let auth = use_auth();
    let name = auth()
        .identity
        .map(|identity| identity.name)
        .unwrap_or_default();

    rsx! {
        div {
            class: "page dashboard",

            header {
                class: "page-header",
                h1 { "Hey {name}, ready to practice?" }
                p { "Run a mock interview and get feedback on your answers and composure." }
            }

            Card {
                class: "cta-card",
                span { class: "cta-icon", Icon { width: 24, height: 24, fill: "currentColor", icon: FaMicrophone } }
                h2 { "Start a mock interview" }
                p { "Personalized questions for your target role, with real-time stress analysis." }
                Button {
                    variant: ButtonVariant::Primary,
                    "Start Interview"
                }
            }

            div {
                class: "stat-grid",
                Card {
                    class: "stat-card",
                    span { class: "stat-icon", Icon { width: 18, height: 18, fill: "currentColor", icon: FaClock } }
                    span { class: "stat-number", "0" }
                    span { class: "stat-label", "Sessions Completed" }
                }
                Card {
                    class: "stat-card",
                    span { class: "stat-icon", Icon { width: 18, height: 18, fill: "currentColor", icon: FaGraduationCap } }
                    span { class: "stat-number", "—" }
                    span { class: "stat-label", "Best Performance" }
                }
            }

            Card {
                class: "list-card",
                h2 { "Tips for your next session" }
                ul {
                    li { "Answer out loud, as if the interviewer were in the room." }
                    li { "Keep your resume nearby — questions are tailored to it." }
                    li { "Review the stress analysis afterwards, not during." }
                }
            }
        }
    }
}
