//! `lakehouse-calendar [YYYY-MM-DD]`
//!
//! Signs in with a one-time code and prints who is booked on the given day
//! (today when omitted). With `LAKEHOUSE__FEATURES__DEMO_MODE=true` it runs
//! against seeded in-memory data, already signed in as the admin.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lakehouse_calendar::adapters::memory::DemoBackend;
use lakehouse_calendar::adapters::supabase::{
    SupabaseBookingRepository, SupabaseClient, SupabaseConfig, SupabaseIdentityProvider,
    SupabaseProfileRepository,
};
use lakehouse_calendar::application::handlers::auth::{
    RequestSignInCodeCommand, RequestSignInCodeHandler, VerifySignInCodeCommand,
    VerifySignInCodeHandler,
};
use lakehouse_calendar::application::{
    AccessGate, GetDayBookingsHandler, GetDayBookingsQuery, ResolveAccessGateHandler,
};
use lakehouse_calendar::config::AppConfig;
use lakehouse_calendar::domain::calendar::CalendarDate;
use lakehouse_calendar::domain::foundation::AuthError;
use lakehouse_calendar::ports::{BookingRepository, IdentityProvider, ProfileRepository};

struct Backend {
    bookings: Arc<dyn BookingRepository>,
    profiles: Arc<dyn ProfileRepository>,
    identity: Arc<dyn IdentityProvider>,
}

impl Backend {
    fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        if config.features.demo_mode {
            let demo = DemoBackend::seeded()?;
            return Ok(Self {
                bookings: demo.bookings,
                profiles: demo.profiles,
                identity: demo.identity,
            });
        }

        let client = SupabaseClient::new(SupabaseConfig::from_backend(&config.backend))?;
        Ok(Self {
            bookings: Arc::new(SupabaseBookingRepository::new(client.clone())),
            profiles: Arc::new(SupabaseProfileRepository::new(client.clone())),
            identity: Arc::new(SupabaseIdentityProvider::new(client)),
        })
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.runtime.log_level));

    // stdout carries the calendar output; logs go to stderr.
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn auth_failure(err: AuthError, verbose: bool) -> anyhow::Error {
    if verbose {
        anyhow!("{} ({})", err.friendly_message(), err)
    } else {
        anyhow!(err.friendly_message())
    }
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> anyhow::Result<String> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    match lines.next_line().await? {
        Some(line) => Ok(line),
        None => bail!("input closed before sign-in finished"),
    }
}

async fn sign_in(identity: Arc<dyn IdentityProvider>, verbose: bool) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let email = prompt(&mut lines, "Email: ").await?;
    let email = RequestSignInCodeHandler::new(identity.clone())
        .handle(RequestSignInCodeCommand { email })
        .await
        .map_err(|e| auth_failure(e, verbose))?;
    println!("We sent a sign-in code to {}.", email);

    let code = prompt(&mut lines, "Code: ").await?;
    VerifySignInCodeHandler::new(identity)
        .handle(VerifySignInCodeCommand { email, code })
        .await
        .map_err(|e| auth_failure(e, verbose))?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config);

    let day = match std::env::args().nth(1) {
        Some(arg) => CalendarDate::parse(&arg).with_context(|| format!("'{}' is not a YYYY-MM-DD date", arg))?,
        None => CalendarDate::today(),
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        demo_mode = config.features.demo_mode,
        day = %day,
        "Starting lakehouse calendar"
    );

    let backend = Backend::connect(&config)?;
    let verbose = config.features.verbose_errors;
    let gate = ResolveAccessGateHandler::new(backend.identity.clone(), backend.profiles.clone());

    let mut access = gate.handle().await?;
    if access == AccessGate::SignedOut {
        sign_in(backend.identity.clone(), verbose).await?;
        access = gate.handle().await?;
    }

    let ctx = match access {
        AccessGate::Ready(ctx) => ctx,
        AccessGate::PendingApproval { email } => {
            println!("Your account ({}) is waiting for an admin to approve it.", email);
            return Ok(());
        }
        AccessGate::SignedOut => bail!("sign-in did not produce a session"),
    };

    let bookings = GetDayBookingsHandler::new(backend.bookings)
        .handle(&ctx, GetDayBookingsQuery { day })
        .await?;

    println!("{}", day.to_display());
    if bookings.is_empty() {
        println!("No one is booked");
        return Ok(());
    }
    for booking in bookings {
        let marker = if booking.is_blocked { " [blocked]" } else { "" };
        println!("  {}{}  {}", booking.label, marker, booking.date_range_display());
        if let Some(notes) = &booking.notes {
            println!("    {}", notes);
        }
    }

    Ok(())
}
