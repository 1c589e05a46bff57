use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use sea_orm::DatabaseConnection;

use super::error::ProductError;
use super::{csv_import, repository};

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Product>> {
    repository::list_all(conn).await
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(conn, id).await
}

pub async fn create(conn: &DatabaseConnection, dto: ProductDto) -> anyhow::Result<Product> {
    dto.validate().map_err(ProductError::Invalid)?;
    let product = repository::insert(conn, &dto).await?;
    tracing::info!("Product {} created: {}", product.id, product.name);
    Ok(product)
}

/// Returns `None` when the product does not exist
pub async fn update(
    conn: &DatabaseConnection,
    id: i32,
    dto: ProductDto,
) -> anyhow::Result<Option<Product>> {
    dto.validate().map_err(ProductError::Invalid)?;

    let Some(mut product) = repository::get_by_id(conn, id).await? else {
        return Ok(None);
    };
    product.update(&dto);
    repository::update(conn, &product).await?;
    Ok(Some(product))
}

pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let deleted = repository::delete(conn, id).await?;
    if deleted {
        tracing::info!("Product {} deleted", id);
    }
    Ok(deleted)
}

/// Import a CSV file; nothing is stored when any row is invalid
pub async fn import_csv(conn: &DatabaseConnection, data: &[u8]) -> anyhow::Result<usize> {
    let products = csv_import::parse_products(data)
        .map_err(|e| ProductError::InvalidCsv(e.to_string()))?;
    let count = repository::insert_many(conn, &products).await?;
    tracing::info!("Imported {} products from CSV", count);
    Ok(count)
}

/// Insert the demo catalog when the table is empty
pub async fn seed_demo_catalog(conn: &DatabaseConnection) -> anyhow::Result<usize> {
    if repository::count(conn).await? > 0 {
        return Ok(0);
    }

    let item = |name: &str, description: &str, category: Option<&str>| ProductDto {
        name: name.into(),
        description: Some(description.into()),
        image_url: None,
        category: category.map(Into::into),
    };
    let data = vec![
        item("LED Panel Light 18W", "Slim recessed panel, cool white", Some("Lighting")),
        item("Decorative Chandelier", "Crystal finish, 6 lamps", None),
        item("9W LED Bulb", "B22 base, 900 lumens", None),
        item("LED Ceiling Fan 1200mm", "BLDC motor with remote", None),
        item("Exhaust Fan 150mm", "Kitchen and bathroom ventilation", Some("Fans")),
        item("Modular Switch 6A", "One way, white", None),
        item("5 Pin Socket 16A", "With shutter", Some("Sockets")),
        item("FR PVC Copper Wire 1.5 sq mm", "90 m coil", None),
        item("Armoured Power Cable 4 Core", "Per metre", Some("Cables")),
        item("MCB 32A Double Pole", "C curve", None),
        item("Distribution Box 8 Way", "Double door, IP42", None),
        item("PVC Insulation Tape", "Pack of 10", Some("Other")),
    ];

    let count = repository::insert_many(conn, &data).await?;
    tracing::info!("Seeded demo catalog with {} products", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn dto(name: &str) -> ProductDto {
        ProductDto {
            name: name.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_update_delete_round_trip() {
        let conn = connect_in_memory().await.unwrap();

        let created = create(&conn, dto("Table Fan")).await.unwrap();
        assert!(created.id > 0);

        let updated = update(
            &conn,
            created.id,
            ProductDto {
                name: "Table Fan 400mm".into(),
                category: Some("Fans".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(updated.name, "Table Fan 400mm");

        let stored = get_by_id(&conn, created.id).await.unwrap().unwrap();
        assert_eq!(stored.category.as_deref(), Some("Fans"));

        assert!(delete(&conn, created.id).await.unwrap());
        assert!(!delete(&conn, created.id).await.unwrap());
        assert!(get_by_id(&conn, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let conn = connect_in_memory().await.unwrap();
        assert!(create(&conn, dto("  ")).await.is_err());
        assert!(update(&conn, 1, dto("")).await.is_err());
        assert!(update(&conn, 999, dto("Real name")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn input_errors_are_typed() {
        let conn = connect_in_memory().await.unwrap();

        let err = create(&conn, dto("")).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProductError>(),
            Some(ProductError::Invalid(msg)) if msg == "Name cannot be empty"
        ));

        let err = import_csv(&conn, b"title\nX\n").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProductError>(),
            Some(ProductError::InvalidCsv(_))
        ));
    }

    #[tokio::test]
    async fn invalid_csv_stores_nothing() {
        let conn = connect_in_memory().await.unwrap();
        let csv = "name\nLED Bulb\n";
        assert_eq!(import_csv(&conn, csv.as_bytes()).await.unwrap(), 1);

        let bad = "name,category\nTube Light,Lighting\n,Fans\n";
        assert!(import_csv(&conn, bad.as_bytes()).await.is_err());
        assert_eq!(list_all(&conn).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn demo_catalog_is_seeded_once() {
        let conn = connect_in_memory().await.unwrap();
        let seeded = seed_demo_catalog(&conn).await.unwrap();
        assert!(seeded > 0);
        assert_eq!(seed_demo_catalog(&conn).await.unwrap(), 0);
        assert_eq!(list_all(&conn).await.unwrap().len(), seeded);
    }
}
