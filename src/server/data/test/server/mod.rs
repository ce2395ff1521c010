use crate::server::{
    data::server::{update::ServerUpdate, ServerRepository},
    model::{
        pagination::Pagination,
        server::{CreateServerParams, UpdateServerParams},
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod update;
