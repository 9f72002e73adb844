//! Static screen content: dashboard stats, recent tickets, the profile
//! activity feed, and default notification preferences.
//!
//! Everything here is presentation data with no behavior; the screens are
//! pure functions of controller state plus these fixtures.

use shared::domain::{TicketId, TicketPriority, TicketStatus, UserProfile};

pub const WELCOME_SUBTITLE: &str = "Here's what's happening with your helpdesk today.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    /// Delta versus last month, e.g. `+12%`.
    pub change: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketSummary {
    pub id: TicketId,
    pub title: &'static str,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub assignee: &'static str,
    pub created: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightCard {
    pub heading: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub action: &'static str,
    pub time: &'static str,
}

/// Per-user toggles on the profile settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub ticket_updates: bool,
    pub weekly_reports: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            ticket_updates: true,
            weekly_reports: false,
        }
    }
}

pub fn welcome_banner(profile: &UserProfile) -> String {
    format!("Welcome back, {}!", profile.name)
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Open Tickets",
            value: "24",
            change: "+12%",
        },
        StatCard {
            title: "Resolved Today",
            value: "18",
            change: "+8%",
        },
        StatCard {
            title: "Avg Response Time",
            value: "2.4h",
            change: "-15%",
        },
        StatCard {
            title: "Active Users",
            value: "156",
            change: "+5%",
        },
    ]
}

pub fn recent_tickets() -> Vec<TicketSummary> {
    vec![
        TicketSummary {
            id: TicketId(1234),
            title: "Login issues with new system",
            priority: TicketPriority::High,
            status: TicketStatus::Open,
            assignee: "John Doe",
            created: "2 hours ago",
        },
        TicketSummary {
            id: TicketId(1235),
            title: "Email not syncing properly",
            priority: TicketPriority::Medium,
            status: TicketStatus::InProgress,
            assignee: "Sarah Wilson",
            created: "4 hours ago",
        },
        TicketSummary {
            id: TicketId(1236),
            title: "Network connectivity problems",
            priority: TicketPriority::Low,
            status: TicketStatus::Resolved,
            assignee: "Mike Johnson",
            created: "1 day ago",
        },
    ]
}

pub fn quick_actions() -> [&'static str; 4] {
    [
        "Create New Ticket",
        "View User Directory",
        "Knowledge Base",
        "View Reports",
    ]
}

pub fn insights() -> Vec<InsightCard> {
    vec![
        InsightCard {
            heading: "Peak Hours Detection",
            body: "Most tickets are created between 9-11 AM. Consider increasing staff during these hours.",
        },
        InsightCard {
            heading: "Common Issues",
            body: "Login problems account for 35% of tickets. A self-service guide could reduce workload.",
        },
    ]
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "Updated profile information",
            time: "2 hours ago",
        },
        ActivityEntry {
            action: "Resolved ticket #1234",
            time: "5 hours ago",
        },
        ActivityEntry {
            action: "Created new ticket #1233",
            time: "1 day ago",
        },
        ActivityEntry {
            action: "Updated password",
            time: "3 days ago",
        },
        ActivityEntry {
            action: "Joined helpdesk platform",
            time: "2 weeks ago",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_ids_render_with_hash_prefix() {
        let tickets = recent_tickets();
        assert_eq!(tickets[0].id.to_string(), "#1234");
    }

    #[test]
    fn preferences_default_to_the_original_toggles() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.email_notifications);
        assert!(prefs.ticket_updates);
        assert!(!prefs.weekly_reports);
    }
}
