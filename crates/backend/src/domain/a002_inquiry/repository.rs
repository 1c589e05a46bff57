use chrono::NaiveDateTime;
use contracts::domain::a002_inquiry::aggregate::{Inquiry, InquiryStatus};
use contracts::domain::a002_inquiry::reference_code::ReferenceCode;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_inquiry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub reference_code: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// JSON array of product ids
    pub product_ids: Option<String>,
    /// JSON array of product names, resolved at submission time
    pub product_names: Option<String>,
    pub created_at: NaiveDateTime,
    pub is_read: bool,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Inquiry {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let reference_code = ReferenceCode::parse(&m.reference_code).map_err(anyhow::Error::msg)?;
        let status = InquiryStatus::parse(&m.status).unwrap_or_else(|| {
            tracing::warn!(
                "Inquiry {} has unknown status '{}', treating as PENDING",
                m.reference_code,
                m.status
            );
            InquiryStatus::Pending
        });
        Ok(Inquiry {
            id: m.id,
            reference_code,
            name: m.name,
            email: m.email,
            phone: m.phone,
            message: m.message,
            product_ids: decode_list(m.product_ids.as_deref())?,
            product_names: decode_list(m.product_names.as_deref())?,
            created_at: m.created_at,
            is_read: m.is_read,
            status,
        })
    }
}

fn encode_list<T: serde::Serialize>(items: &[T]) -> anyhow::Result<Option<String>> {
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(items)?))
}

fn decode_list<T: serde::de::DeserializeOwned>(raw: Option<&str>) -> anyhow::Result<Vec<T>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Vec::new()),
        Some(raw) => Ok(serde_json::from_str(raw)?),
    }
}

fn into_aggregates(models: Vec<Model>) -> anyhow::Result<Vec<Inquiry>> {
    models.into_iter().map(Inquiry::try_from).collect()
}

/// Data of an inquiry before it is stored
#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub reference_code: ReferenceCode,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub product_ids: Vec<i32>,
    pub product_names: Vec<String>,
    pub created_at: NaiveDateTime,
}

pub async fn insert(conn: &DatabaseConnection, new: NewInquiry) -> anyhow::Result<Inquiry> {
    let active = ActiveModel {
        id: NotSet,
        reference_code: Set(new.reference_code.to_string()),
        name: Set(new.name),
        email: Set(new.email),
        phone: Set(new.phone),
        message: Set(new.message),
        product_ids: Set(encode_list(&new.product_ids)?),
        product_names: Set(encode_list(&new.product_names)?),
        created_at: Set(new.created_at),
        is_read: Set(false),
        status: Set(InquiryStatus::Pending.as_str().to_string()),
    };
    let model = active.insert(conn).await?;
    Inquiry::try_from(model)
}

pub async fn get_by_code(
    conn: &DatabaseConnection,
    code: &ReferenceCode,
) -> anyhow::Result<Option<Inquiry>> {
    Entity::find()
        .filter(Column::ReferenceCode.eq(code.as_str()))
        .one(conn)
        .await?
        .map(Inquiry::try_from)
        .transpose()
}

/// All inquiries, newest first
pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Inquiry>> {
    let models = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(conn)
        .await?;
    into_aggregates(models)
}

/// Unread inquiries, newest first
pub async fn list_unread(conn: &DatabaseConnection) -> anyhow::Result<Vec<Inquiry>> {
    let models = Entity::find()
        .filter(Column::IsRead.eq(false))
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(conn)
        .await?;
    into_aggregates(models)
}

pub async fn count_unread(conn: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsRead.eq(false))
        .count(conn)
        .await?)
}

/// Mark an inquiry read and optionally change its status.
/// Returns `false` when no inquiry has this code.
pub async fn mark_read(
    conn: &DatabaseConnection,
    code: &ReferenceCode,
    status: Option<InquiryStatus>,
) -> anyhow::Result<bool> {
    let mut update = Entity::update_many().col_expr(Column::IsRead, Expr::value(true));
    if let Some(status) = status {
        update = update.col_expr(Column::Status, Expr::value(status.as_str()));
    }
    let result = update
        .filter(Column::ReferenceCode.eq(code.as_str()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}
