use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// An inventory item that can be checked out through a service request.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.len() > NAME_MAX_LEN {
        return Err(ModelError::Validation(format!("name exceeds {} chars", NAME_MAX_LEN)));
    }
    Ok(())
}

pub fn validate_description(description: Option<&str>) -> Result<(), ModelError> {
    if let Some(d) = description {
        if d.len() > DESCRIPTION_MAX_LEN {
            return Err(ModelError::Validation(format!(
                "description exceeds {} chars",
                DESCRIPTION_MAX_LEN
            )));
        }
    }
    Ok(())
}

pub fn validate_quantity(quantity: i32) -> Result<(), ModelError> {
    if quantity < 0 {
        return Err(ModelError::Validation("quantity must be >= 0".into()));
    }
    Ok(())
}
