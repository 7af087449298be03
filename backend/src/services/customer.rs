//! Customer management service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Customer;
use shared::validation::{validate_customer_name, validate_iranian_phone};

/// Customer service for registration and lookup
#[derive(Clone)]
pub struct CustomerService {
    db: PgPool,
}

/// Input for creating a customer
#[derive(Debug, Deserialize)]
pub struct CreateCustomerInput {
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Input for updating a customer
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

type CustomerRow = (Uuid, String, Option<String>, Option<String>, DateTime<Utc>);

impl CustomerService {
    /// Create a new CustomerService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn check_name(name: &str) -> AppResult<()> {
        validate_customer_name(name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
            message_fa: "نام مشتری نامعتبر است".to_string(),
        })
    }

    fn check_phone(phone: Option<&str>) -> AppResult<()> {
        if let Some(phone) = phone {
            if !phone.trim().is_empty() {
                validate_iranian_phone(phone).map_err(|msg| AppError::Validation {
                    field: "phone".to_string(),
                    message: msg.to_string(),
                    message_fa: "شماره تماس نامعتبر است".to_string(),
                })?;
            }
        }
        Ok(())
    }

    /// Get all customers, newest first
    pub async fn get_customers(&self) -> AppResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, address, created_at
            FROM customers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Customer {
                id: r.0,
                name: r.1,
                phone: r.2,
                address: r.3,
                created_at: r.4,
            })
            .collect())
    }

    /// Get a customer by ID
    pub async fn get_customer(&self, customer_id: Uuid) -> AppResult<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, phone, address, created_at FROM customers WHERE id = $1",
        )
        .bind(customer_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

        Ok(Customer {
            id: row.0,
            name: row.1,
            phone: row.2,
            address: row.3,
            created_at: row.4,
        })
    }

    /// Create a new customer
    pub async fn create_customer(&self, input: CreateCustomerInput) -> AppResult<Customer> {
        Self::check_name(&input.name)?;
        Self::check_phone(input.phone.as_deref())?;

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, phone, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, phone, address, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.phone)
        .bind(&input.address)
        .fetch_one(&self.db)
        .await?;

        Ok(Customer {
            id: row.0,
            name: row.1,
            phone: row.2,
            address: row.3,
            created_at: row.4,
        })
    }

    /// Update a customer
    pub async fn update_customer(
        &self,
        customer_id: Uuid,
        input: UpdateCustomerInput,
    ) -> AppResult<Customer> {
        let existing = sqlx::query_as::<_, (String, Option<String>, Option<String>)>(
            "SELECT name, phone, address FROM customers WHERE id = $1",
        )
        .bind(customer_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer".to_string()))?;

        let name = input.name.unwrap_or(existing.0);
        let phone = input.phone.or(existing.1);
        let address = input.address.or(existing.2);

        Self::check_name(&name)?;
        Self::check_phone(phone.as_deref())?;

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET name = $1, phone = $2, address = $3
            WHERE id = $4
            RETURNING id, name, phone, address, created_at
            "#,
        )
        .bind(name.trim())
        .bind(&phone)
        .bind(&address)
        .bind(customer_id)
        .fetch_one(&self.db)
        .await?;

        Ok(Customer {
            id: row.0,
            name: row.1,
            phone: row.2,
            address: row.3,
            created_at: row.4,
        })
    }

    /// Delete a customer (cascades to their orders and line items)
    pub async fn delete_customer(&self, customer_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer".to_string()));
        }
        Ok(())
    }

    /// Find a customer by name or create one.
    ///
    /// Explicit two-step (select, then insert if absent) inside a single
    /// transaction so that concurrent order entry cannot register the same
    /// customer twice.
    pub async fn find_or_create(&self, name: &str, phone: Option<&str>) -> AppResult<Customer> {
        Self::check_name(name)?;
        Self::check_phone(phone)?;

        let mut tx = self.db.begin().await?;

        let existing = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, address, created_at
            FROM customers
            WHERE name = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(name.trim())
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(row) = existing {
            tx.commit().await?;
            return Ok(Customer {
                id: row.0,
                name: row.1,
                phone: row.2,
                address: row.3,
                created_at: row.4,
            });
        }

        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, phone)
            VALUES ($1, $2)
            RETURNING id, name, phone, address, created_at
            "#,
        )
        .bind(name.trim())
        .bind(phone)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Customer {
            id: row.0,
            name: row.1,
            phone: row.2,
            address: row.3,
            created_at: row.4,
        })
    }
}
