use crate::{
    data::slot::SlotRepository,
    model::slot::{SlotIndex, SlotState},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{set_slot_cell, slot_cells},
    },
};

mod find_by_court;
mod transition;
