use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Impact {
    #[sea_orm(string_value = "increase")]
    Increase,
    #[sea_orm(string_value = "decrease")]
    Decrease,
}

impl From<Impact> for common::Impact {
    fn from(impact: Impact) -> Self {
        match impact {
            Impact::Increase => common::Impact::Increase,
            Impact::Decrease => common::Impact::Decrease,
        }
    }
}

impl From<common::Impact> for Impact {
    fn from(impact: common::Impact) -> Self {
        match impact {
            common::Impact::Increase => Impact::Increase,
            common::Impact::Decrease => Impact::Decrease,
        }
    }
}

/// One explanatory driver behind a customer's score.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "churn_drivers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_id: String,
    pub driver_name: String,
    pub impact: Impact,
    /// Lower sorts first.
    pub priority: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_delete = "Cascade"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::ChurnDriver {
    fn from(model: Model) -> Self {
        common::ChurnDriver {
            id: model.id,
            customer_id: model.customer_id,
            driver_name: model.driver_name,
            impact: model.impact.into(),
            priority: model.priority,
            created_at: model.created_at,
        }
    }
}
