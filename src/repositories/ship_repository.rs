use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::models::{NewShip, Ship};
use crate::query::{FieldValue, Predicate, ShipQuery};
use crate::repositories::ship_store::ShipStore;
use crate::utils::errors::{not_found_error, AppError};

const SHIP_COLUMNS: &str =
    "id, name, planet, ship_type, prod_date, speed, crew_size, is_used, rating";

pub struct PgShipRepository {
    pool: PgPool,
}

impl PgShipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipStore for PgShipRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>, AppError> {
        let ship = sqlx::query_as::<_, Ship>(&format!("SELECT {} FROM ships WHERE id = $1", SHIP_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ship)
    }

    async fn insert(&self, ship: NewShip) -> Result<Ship, AppError> {
        let ship = sqlx::query_as::<_, Ship>(&format!(
            r#"
            INSERT INTO ships (name, planet, ship_type, prod_date, speed, crew_size, is_used, rating)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            SHIP_COLUMNS
        ))
        .bind(ship.name)
        .bind(ship.planet)
        .bind(ship.ship_type)
        .bind(ship.prod_date)
        .bind(ship.speed)
        .bind(ship.crew_size)
        .bind(ship.is_used)
        .bind(ship.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(ship)
    }

    async fn update(&self, ship: &Ship) -> Result<Ship, AppError> {
        let id = ship.id;
        let ship = sqlx::query_as::<_, Ship>(&format!(
            r#"
            UPDATE ships
            SET name = $2, planet = $3, ship_type = $4, prod_date = $5,
                speed = $6, crew_size = $7, is_used = $8, rating = $9
            WHERE id = $1
            RETURNING {}
            "#,
            SHIP_COLUMNS
        ))
        .bind(ship.id)
        .bind(&ship.name)
        .bind(&ship.planet)
        .bind(ship.ship_type)
        .bind(ship.prod_date)
        .bind(ship.speed)
        .bind(ship.crew_size)
        .bind(ship.is_used)
        .bind(ship.rating)
        .fetch_optional(&self.pool)
        .await?;

        ship.ok_or_else(|| not_found_error("Ship", id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM ships WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ships")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    async fn find_page(&self, query: &ShipQuery) -> Result<Vec<Ship>, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM ships", SHIP_COLUMNS));
        push_where(&mut builder, &query.predicates);

        builder
            .push(" ORDER BY ")
            .push(query.sort_field().column())
            .push(" ASC, id ASC LIMIT ")
            .push_bind(clamp_i64(query.page.limit()))
            .push(" OFFSET ")
            .push_bind(clamp_i64(query.page.offset()));

        debug!("Ship page query: {}", builder.sql());

        let ships = builder.build_query_as::<Ship>().fetch_all(&self.pool).await?;
        Ok(ships)
    }

    async fn count_matching(&self, predicates: &[Predicate]) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ships");
        push_where(&mut builder, predicates);

        debug!("Ship count query: {}", builder.sql());

        let result = builder.build_query_as::<(i64,)>().fetch_one(&self.pool).await?;
        Ok(result.0)
    }
}

/// Traducir la conjunción de predicados a una cláusula WHERE con binds
fn push_where(builder: &mut QueryBuilder<'_, Postgres>, predicates: &[Predicate]) {
    for (index, predicate) in predicates.iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });

        match predicate {
            Predicate::Equals { field, value } => {
                builder.push(field.column()).push(" = ");
                push_value(builder, value);
            }
            Predicate::Contains { field, needle } => {
                // strpos es sensible a mayúsculas y no interpreta comodines
                builder
                    .push("strpos(")
                    .push(field.column())
                    .push(", ")
                    .push_bind(needle.clone())
                    .push(") > 0");
            }
            Predicate::Range { field, min, max } => {
                builder.push("(TRUE");
                if let Some(min) = min {
                    builder.push(" AND ").push(field.column()).push(" >= ");
                    push_value(builder, min);
                }
                if let Some(max) = max {
                    builder.push(" AND ").push(field.column()).push(" <= ");
                    push_value(builder, max);
                }
                builder.push(")");
            }
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: &FieldValue) {
    match value {
        FieldValue::Text(text) => builder.push_bind(text.clone()),
        FieldValue::ShipType(ship_type) => builder.push_bind(*ship_type),
        FieldValue::Bool(flag) => builder.push_bind(*flag),
        FieldValue::Timestamp(instant) => builder.push_bind(*instant),
        FieldValue::Float(number) => builder.push_bind(*number),
        FieldValue::Int(number) => builder.push_bind(*number),
    };
}

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
