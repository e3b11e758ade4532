//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    Condition, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use socktalk_core::domain::Post;
use socktalk_core::error::StoreError;
use socktalk_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// `PostStore` backed by PostgreSQL through SeaORM.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> StoreError {
    match err {
        DbErr::Conn(e) => StoreError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => StoreError::Connection(e.to_string()),
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn find_page(&self, skip: i64, limit: u64) -> Result<Vec<Post>, StoreError> {
        // The listing handler forwards its offset arithmetic unvalidated;
        // a negative skip is a query error, same as the backing store would raise.
        let offset = u64::try_from(skip)
            .map_err(|_| StoreError::Query(format!("skip must be non-negative, got {skip}")))?;

        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let id = Uuid::parse_str(id).map_err(|e| StoreError::MalformedId(e.to_string()))?;

        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, StoreError> {
        let pattern = format!("%{term}%");

        let rows = PostEntity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(post::Column::Title).ilike(pattern.as_str()))
                    .add(Expr::col(post::Column::Body).ilike(pattern.as_str())),
            )
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
