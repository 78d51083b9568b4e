use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "court")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub location: String,
    pub capacity: Option<i32>,
    /// 1 = active, any other value = inactive
    pub status: i32,
    pub sport_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sport::Entity",
        from = "Column::SportId",
        to = "super::sport::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Sport,
    #[sea_orm(has_one = "super::court_time_slots::Entity")]
    CourtTimeSlots,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::sport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sport.def()
    }
}

impl Related<super::court_time_slots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourtTimeSlots.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
