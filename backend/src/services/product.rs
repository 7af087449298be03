//! Product catalog service

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductSummary};
use shared::validation::{validate_price, validate_product_name};

/// Product service for catalog management
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Input for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    pub size: String,
    pub color: String,
    pub price: i64,
    pub stock: Option<i32>,
}

/// Input for updating a product
#[derive(Debug, Deserialize)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i32>,
}

type ProductRow = (
    Uuid,
    String,
    String,
    String,
    i64,
    i32,
    DateTime<Utc>,
    DateTime<Utc>,
);

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn check_name(name: &str) -> AppResult<()> {
        validate_product_name(name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
            message_fa: "نام محصول نامعتبر است".to_string(),
        })
    }

    fn check_price(price: i64) -> AppResult<()> {
        validate_price(price).map_err(|msg| AppError::Validation {
            field: "price".to_string(),
            message: msg.to_string(),
            message_fa: "قیمت نمی‌تواند منفی باشد".to_string(),
        })
    }

    /// Get all products
    pub async fn get_products(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, size, color, price, stock, created_at, updated_at
            FROM products
            ORDER BY name ASC, size ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Product {
                id: r.0,
                name: r.1,
                size: r.2,
                color: r.3,
                price: r.4,
                stock: r.5,
                created_at: r.6,
                updated_at: r.7,
            })
            .collect())
    }

    /// Get a product by ID
    pub async fn get_product(&self, product_id: Uuid) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, size, color, price, stock, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        Ok(Product {
            id: row.0,
            name: row.1,
            size: row.2,
            color: row.3,
            price: row.4,
            stock: row.5,
            created_at: row.6,
            updated_at: row.7,
        })
    }

    /// Get the catalog in picker form (id, name, size, color, price).
    /// Feeds the legacy products endpoint used by the order-entry script.
    pub async fn get_product_picker(&self) -> AppResult<Vec<ProductSummary>> {
        let rows = sqlx::query_as::<_, (Uuid, String, String, String, i64)>(
            r#"
            SELECT id, name, size, color, price
            FROM products
            ORDER BY name ASC, size ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ProductSummary {
                id: r.0,
                name: r.1,
                size: r.2,
                color: r.3,
                price: r.4,
            })
            .collect())
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        Self::check_name(&input.name)?;
        Self::check_price(input.price)?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, size, color, price, stock)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, size, color, price, stock, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.size)
        .bind(&input.color)
        .bind(input.price)
        .bind(input.stock.unwrap_or(0))
        .fetch_one(&self.db)
        .await?;

        Ok(Product {
            id: row.0,
            name: row.1,
            size: row.2,
            color: row.3,
            price: row.4,
            stock: row.5,
            created_at: row.6,
            updated_at: row.7,
        })
    }

    /// Update a product
    pub async fn update_product(
        &self,
        product_id: Uuid,
        input: UpdateProductInput,
    ) -> AppResult<Product> {
        let existing = sqlx::query_as::<_, (String, String, String, i64, i32)>(
            "SELECT name, size, color, price, stock FROM products WHERE id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let name = input.name.unwrap_or(existing.0);
        let size = input.size.unwrap_or(existing.1);
        let color = input.color.unwrap_or(existing.2);
        let price = input.price.unwrap_or(existing.3);
        let stock = input.stock.unwrap_or(existing.4);

        Self::check_name(&name)?;
        Self::check_price(price)?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $1, size = $2, color = $3, price = $4, stock = $5, updated_at = now()
            WHERE id = $6
            RETURNING id, name, size, color, price, stock, created_at, updated_at
            "#,
        )
        .bind(name.trim())
        .bind(&size)
        .bind(&color)
        .bind(price)
        .bind(stock)
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        Ok(Product {
            id: row.0,
            name: row.1,
            size: row.2,
            color: row.3,
            price: row.4,
            stock: row.5,
            created_at: row.6,
            updated_at: row.7,
        })
    }

    /// Delete a product.
    ///
    /// Referencing line items are deleted with it (explicit cascade policy).
    pub async fn delete_product(&self, product_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }
        Ok(())
    }
}
