use sea_orm::entity::prelude::*;

/// One row per court holding the ten hourly availability cells for 08:00-18:00.
///
/// Each cell stores 1 (available) or 2 (booked).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "court_time_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub court_id: i32,
    pub slot_08_09: i32,
    pub slot_09_10: i32,
    pub slot_10_11: i32,
    pub slot_11_12: i32,
    pub slot_12_13: i32,
    pub slot_13_14: i32,
    pub slot_14_15: i32,
    pub slot_15_16: i32,
    pub slot_16_17: i32,
    pub slot_17_18: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::court::Entity",
        from = "Column::CourtId",
        to = "super::court::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Court,
}

impl Related<super::court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Court.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Slot columns in wall-clock order; position `i` covers `(8 + i):00` to `(9 + i):00`.
pub const SLOT_COLUMNS: [Column; 10] = [
    Column::Slot0809,
    Column::Slot0910,
    Column::Slot1011,
    Column::Slot1112,
    Column::Slot1213,
    Column::Slot1314,
    Column::Slot1415,
    Column::Slot1516,
    Column::Slot1617,
    Column::Slot1718,
];

impl Model {
    /// Raw cell values in the same order as [`SLOT_COLUMNS`].
    pub fn cells(&self) -> [i32; 10] {
        [
            self.slot_08_09,
            self.slot_09_10,
            self.slot_10_11,
            self.slot_11_12,
            self.slot_12_13,
            self.slot_13_14,
            self.slot_14_15,
            self.slot_15_16,
            self.slot_16_17,
            self.slot_17_18,
        ]
    }
}
