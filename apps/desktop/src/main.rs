use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{
    screens, strength_label, IdentityService, Navigator, NoticeKind, Notifier, ProfileEditor,
    RegistrationForm,
};
use tracing::{error, info};

mod config;
mod identity_stub;

use identity_stub::InMemoryIdentityService;

#[derive(Parser, Debug)]
struct Args {
    /// Screen to walk through: dashboard, profile, register, or all.
    #[arg(long, default_value = "all")]
    screen: String,
}

/// Toast notifications land in the log in this headless client.
struct ToastLog;

impl Notifier for ToastLog {
    fn notify(&self, kind: NoticeKind, title: &str, description: &str) {
        match kind {
            NoticeKind::Info => info!(title, description, "toast"),
            NoticeKind::Error => error!(title, description, "toast"),
        }
    }
}

struct RouteLog;

impl Navigator for RouteLog {
    fn navigate_to(&self, route: &str) {
        info!(route, "navigate");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = config::load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();
    let args = Args::parse();
    if !matches!(
        args.screen.as_str(),
        "dashboard" | "profile" | "register" | "all"
    ) {
        anyhow::bail!(
            "unknown screen `{}`; expected dashboard, profile, register, or all",
            args.screen
        );
    }

    let identity: Arc<dyn IdentityService> = Arc::new(InMemoryIdentityService::seeded(
        &settings.demo_user,
        &settings.demo_email,
    ));
    let notifier: Arc<dyn Notifier> = Arc::new(ToastLog);

    if matches!(args.screen.as_str(), "dashboard" | "all") {
        show_dashboard(Arc::clone(&identity)).await?;
    }
    if matches!(args.screen.as_str(), "profile" | "all") {
        walk_profile_edit(Arc::clone(&identity), Arc::clone(&notifier)).await?;
    }
    if matches!(args.screen.as_str(), "register" | "all") {
        walk_registration(identity, notifier).await?;
    }

    Ok(())
}

async fn show_dashboard(identity: Arc<dyn IdentityService>) -> Result<()> {
    let profile = identity.current_profile().await?;

    println!("{}", screens::welcome_banner(&profile));
    println!("{}", screens::WELCOME_SUBTITLE);
    println!();
    for stat in screens::stat_cards() {
        println!(
            "  {:<18} {:>5}  {} from last month",
            stat.title, stat.value, stat.change
        );
    }
    println!();
    println!("Recent Tickets");
    for ticket in screens::recent_tickets() {
        println!(
            "  {} [{}] [{}] {} (assigned to {}, {})",
            ticket.id,
            ticket.priority.label(),
            ticket.status.label(),
            ticket.title,
            ticket.assignee,
            ticket.created
        );
    }
    println!();
    println!("Quick Actions");
    for action in screens::quick_actions() {
        println!("  [{action}]");
    }
    println!();
    println!("AI Insights");
    for insight in screens::insights() {
        println!("  {}: {}", insight.heading, insight.body);
    }

    Ok(())
}

async fn walk_profile_edit(
    identity: Arc<dyn IdentityService>,
    notifier: Arc<dyn Notifier>,
) -> Result<()> {
    let editor = ProfileEditor::load(identity, notifier).await?;

    editor.begin_edit().await;
    editor.update_field("phone", "555-0123").await?;
    editor.update_field("department", "HR").await?;
    let saved = editor.save().await?;

    println!();
    println!(
        "Profile saved: {} <{}> {} ({} / {})",
        saved.name,
        saved.email,
        saved.phone,
        saved.department,
        saved.role.label()
    );
    println!("Recent Activity");
    for entry in screens::recent_activity() {
        println!("  {} ({})", entry.action, entry.time);
    }
    let prefs = screens::NotificationPreferences::default();
    println!(
        "Notification Preferences: email={} ticket_updates={} weekly_reports={}",
        prefs.email_notifications, prefs.ticket_updates, prefs.weekly_reports
    );

    Ok(())
}

async fn walk_registration(
    identity: Arc<dyn IdentityService>,
    notifier: Arc<dyn Notifier>,
) -> Result<()> {
    let navigator: Arc<dyn Navigator> = Arc::new(RouteLog);
    let form = RegistrationForm::new(identity, notifier, navigator);

    form.set_field("name", "Sam Lee").await?;
    form.set_field("email", "sam.lee@example.com").await?;
    form.set_field("password", "Abc12345!").await?;
    form.set_field("password_confirmation", "Abc12345!").await?;
    form.set_field("department", "General").await?;

    let strength = form.password_strength().await;
    println!();
    println!("Password strength: {strength}/4 {}", strength_label(strength));

    form.toggle_terms_accepted().await;
    match form.submit().await {
        Ok(()) => println!("Registration complete."),
        Err(err) => error!(error = %err, "registration demo failed"),
    }

    Ok(())
}
