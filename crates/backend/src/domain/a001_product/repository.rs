use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveValue::NotSet, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            description: m.description,
            image_url: m.image_url,
            category: m.category,
        }
    }
}

fn new_active(product: &Product) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        image_url: Set(product.image_url.clone()),
        category: Set(product.category.clone()),
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Product>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

/// Products for the given ids, in the order the ids were given; unknown ids are skipped
pub async fn find_by_ids(conn: &DatabaseConnection, ids: &[i32]) -> anyhow::Result<Vec<Product>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let found: Vec<Product> = Entity::find()
        .filter(Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(ids
        .iter()
        .filter_map(|id| found.iter().find(|p| p.id == *id).cloned())
        .collect())
}

pub async fn insert(conn: &DatabaseConnection, dto: &ProductDto) -> anyhow::Result<Product> {
    let product = Product::from_dto(0, dto.clone());
    let model = new_active(&product).insert(conn).await?;
    Ok(model.into())
}

/// Insert many products in one transaction
pub async fn insert_many(conn: &DatabaseConnection, dtos: &[ProductDto]) -> anyhow::Result<usize> {
    let txn = conn.begin().await?;
    for dto in dtos {
        let product = Product::from_dto(0, dto.clone());
        new_active(&product).insert(&txn).await?;
    }
    txn.commit().await?;
    Ok(dtos.len())
}

pub async fn update(conn: &DatabaseConnection, product: &Product) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(product.id),
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        image_url: Set(product.image_url.clone()),
        category: Set(product.category.clone()),
    };
    active.update(conn).await?;
    Ok(())
}

pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count(conn: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn).await?)
}
