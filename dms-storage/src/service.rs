//! Ticket request web service
//!
//! Serves the request page and prints a ticket for every submitted form.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | /ticketApi/ | Stamp times, print, echo the submission |
//! | GET | /* | Static files from the web root |

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Form, State};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{Local, NaiveDateTime};
use dms_printer::{EscPosDriver, PrintResult, PrinterDriver, UsbPrinter, UsbTarget};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

use crate::error::{AppError, AppResult};
use crate::expiry::StampedTimes;
use crate::formatter::TicketFormatter;
use crate::request::TicketRequest;

/// Opens a fresh printer session per print job
pub trait Connector: Send + Sync {
    fn connect(&self) -> PrintResult<Box<dyn PrinterDriver + Send>>;
}

/// The desk printer on USB
#[derive(Debug, Clone, Copy, Default)]
pub struct UsbConnector {
    target: UsbTarget,
}

impl Connector for UsbConnector {
    fn connect(&self) -> PrintResult<Box<dyn PrinterDriver + Send>> {
        let usb = UsbPrinter::open(self.target)?;
        Ok(Box::new(EscPosDriver::open(usb)?))
    }
}

#[derive(Clone)]
pub struct AppState {
    connector: Arc<dyn Connector>,
    /// The printer is exclusively owned by one job at a time
    print_lock: Arc<Mutex<()>>,
    clock: fn() -> NaiveDateTime,
}

impl AppState {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            connector,
            print_lock: Arc::new(Mutex::new(())),
            clock: local_now,
        }
    }

    /// Replace the wall clock used to stamp submissions
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Blocking: open a session and print the whole ticket
    fn print(&self, req: &TicketRequest) -> AppResult<()> {
        let _guard = self.print_lock.lock();
        let driver = self.connector.connect()?;
        TicketFormatter::new(driver).print_ticket(req)?;
        Ok(())
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Request page form fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketForm {
    pub name: String,
    pub email: String,
    pub description: String,
    pub storage_type: String,
}

/// Echoed back to the request page after printing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TicketSubmission {
    pub name: String,
    pub email: String,
    pub description: String,
    pub storage_type: String,
    pub submit_time: String,
    pub expire_date: String,
}

impl TicketSubmission {
    pub fn stamp(form: TicketForm, times: StampedTimes) -> Self {
        Self {
            name: form.name,
            email: form.email,
            description: form.description,
            storage_type: form.storage_type,
            submit_time: times.submit_time,
            expire_date: times.expire_date,
        }
    }

    pub fn to_request(&self) -> TicketRequest {
        TicketRequest {
            expiration_date: self.expire_date.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            item_type: self.storage_type.clone(),
            description: self.description.clone(),
            print_time: self.submit_time.clone(),
        }
    }
}

pub fn router(state: AppState, web_root: &Path) -> Router {
    Router::new()
        .route("/ticketApi/", post(submit_ticket))
        .fallback_service(ServeDir::new(web_root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[instrument(skip_all, fields(name = %form.name, storage_type = %form.storage_type))]
async fn submit_ticket(
    State(state): State<AppState>,
    Form(form): Form<TicketForm>,
) -> AppResult<Json<TicketSubmission>> {
    let submission = TicketSubmission::stamp(form, StampedTimes::at((state.clock)()));
    let request = submission.to_request();
    info!(expire_date = %submission.expire_date, "Ticket submitted");

    let result = tokio::task::spawn_blocking(move || state.print(&request))
        .await
        .map_err(|e| AppError::Internal(format!("Print task failed: {}", e)))?;

    if let Err(e) = result {
        error!(error = %e, "Print failed");
        return Err(e);
    }

    Ok(Json(submission))
}
