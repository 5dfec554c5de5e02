//! REST-backed booking repository.

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode};
use crate::ports::BookingRepository;

use super::client::{eq, SupabaseClient};
use super::rows::BookingRow;

const TABLE: &str = "bookings";
const COLUMNS: &str = "id,label,start_date,end_date,notes,created_by,is_blocked";

/// Booking repository over the `bookings` table.
#[derive(Clone)]
pub struct SupabaseBookingRepository {
    client: SupabaseClient,
}

impl SupabaseBookingRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn not_found(id: &BookingId) -> DomainError {
        DomainError::new(ErrorCode::BookingNotFound, format!("Booking not found: {}", id))
    }

    async fn fetch(&self, query: &[(&str, String)], operation: &str) -> Result<Vec<Booking>, DomainError> {
        let builder = self
            .client
            .request(Method::GET, &self.client.rest_url(TABLE))
            .await
            .query(&[("select", COLUMNS)])
            .query(query);
        let response = self.client.send(builder, operation).await?;

        let rows: Vec<BookingRow> = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Failed to parse bookings: {}", e)))?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}

#[async_trait]
impl BookingRepository for SupabaseBookingRepository {
    async fn list(&self) -> Result<Vec<Booking>, DomainError> {
        self.fetch(&[("order", "start_date.asc".to_string())], "list bookings")
            .await
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        let mut found = self.fetch(&[("id", eq(id))], "find booking").await?;
        Ok(found.pop())
    }

    async fn insert(&self, booking: &Booking) -> Result<(), DomainError> {
        let builder = self
            .client
            .request(Method::POST, &self.client.rest_url(TABLE))
            .await
            .header("Prefer", "return=minimal")
            .json(&BookingRow::from(booking));
        self.client.send(builder, "insert booking").await?;

        tracing::debug!(booking_id = %booking.id, "booking inserted");
        Ok(())
    }

    async fn update(&self, booking: &Booking) -> Result<(), DomainError> {
        let builder = self
            .client
            .request(Method::PATCH, &self.client.rest_url(TABLE))
            .await
            .query(&[("id", eq(booking.id)), ("select", "id".to_string())])
            .header("Prefer", "return=representation")
            .json(&BookingRow::from(booking));
        let response = self.client.send(builder, "update booking").await?;

        let touched: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Failed to parse update result: {}", e)))?;
        if touched.is_empty() {
            return Err(Self::not_found(&booking.id));
        }
        Ok(())
    }

    async fn delete(&self, id: &BookingId) -> Result<(), DomainError> {
        let builder = self
            .client
            .request(Method::DELETE, &self.client.rest_url(TABLE))
            .await
            .query(&[("id", eq(id)), ("select", "id".to_string())])
            .header("Prefer", "return=representation");
        let response = self.client.send(builder, "delete booking").await?;

        let removed: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Failed to parse delete result: {}", e)))?;
        if removed.is_empty() {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
