use db::models::booth::{BoothPatch, Model as Booth, NewBooth};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::caller::Caller;
use crate::error::{degrade, AppError, AppResult};
use crate::policy::{authorize, require_caller, Operation};

#[derive(Debug, Clone, Default)]
pub struct CreateBooth {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub admin_id: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBooth {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    /// `Some(None)` unassigns the booth.
    pub admin_id: Option<Option<i64>>,
    pub is_active: Option<bool>,
}

fn require_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("booth name must not be empty".into()));
    }
    Ok(name.to_owned())
}

pub struct BoothService;

impl BoothService {
    /// All booths in id order. Empty when the store is unreachable.
    pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<Booth>> {
        authorize(None, Operation::ListBooths)?;
        degrade(Booth::find_all(db).await, Vec::new(), "list_booths")
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> AppResult<Option<Booth>> {
        authorize(None, Operation::GetBooth)?;
        degrade(Booth::find_by_id(db, id).await, None, "get_booth")
    }

    pub async fn create(
        db: &DatabaseConnection,
        caller: Option<&Caller>,
        input: CreateBooth,
    ) -> AppResult<Booth> {
        let caller = require_caller(caller, Operation::CreateBooth)?;
        let name = require_name(&input.name)?;

        let booth = Booth::create(
            db,
            NewBooth {
                name,
                description: input.description,
                location: input.location,
                admin_id: input.admin_id,
            },
        )
        .await
        .map_err(|e| AppError::from_write(e, "booth already exists", "booth admin does not exist"))?;

        info!(booth_id = booth.id, by = caller.id, "booth created");
        Ok(booth)
    }

    pub async fn update(
        db: &DatabaseConnection,
        caller: Option<&Caller>,
        id: i64,
        input: UpdateBooth,
    ) -> AppResult<()> {
        let caller = require_caller(caller, Operation::UpdateBooth)?;
        let name = input.name.as_deref().map(require_name).transpose()?;

        let patch = BoothPatch {
            name,
            description: input.description,
            location: input.location,
            admin_id: input.admin_id,
            is_active: input.is_active,
        };

        Booth::update(db, id, patch)
            .await
            .map_err(|e| AppError::from_write(e, "booth already exists", "booth admin does not exist"))?
            .ok_or(AppError::NotFound("booth"))?;

        info!(booth_id = id, by = caller.id, "booth updated");
        Ok(())
    }

    /// Deletes a booth. Refused with `Conflict` while attendance references it.
    pub async fn delete(db: &DatabaseConnection, caller: Option<&Caller>, id: i64) -> AppResult<()> {
        let caller = require_caller(caller, Operation::DeleteBooth)?;

        let deleted = Booth::delete(db, id).await.map_err(|e| {
            AppError::from_write(e, "booth already exists", "booth has recorded attendance")
        })?;
        if !deleted {
            return Err(AppError::NotFound("booth"));
        }

        info!(booth_id = id, by = caller.id, "booth deleted");
        Ok(())
    }

    /// Booths the caller administers.
    pub async fn my_booths(db: &DatabaseConnection, caller: Option<&Caller>) -> AppResult<Vec<Booth>> {
        let caller = require_caller(caller, Operation::MyBooths)?;
        degrade(Booth::find_by_admin(db, caller.id).await, Vec::new(), "my_booths")
    }
}
