//! 内存存储层
//!
//! 每类实体一张 `DashMap`，id 由各自的原子计数器分配，从 1 开始且不复用。
//! 查询不到时返回 `None`，是否算错误由调用方决定。

mod activity;
mod company;
mod notification;
mod seed;
mod user;

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use thiserror::Error;

use crate::models::{Activity, BurnoutSymptoms, Company, Notification, User};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Email already in use")]
    DuplicateEmail,
    #[error("Username already taken")]
    DuplicateUsername,
    #[error("{0} id sequence exhausted")]
    IdsExhausted(&'static str),
}

struct IdSequence {
    next: AtomicI64,
    kind: &'static str,
}

impl IdSequence {
    fn new(kind: &'static str) -> Self {
        Self::starting_at(kind, 1)
    }

    fn starting_at(kind: &'static str, first: i64) -> Self {
        IdSequence {
            next: AtomicI64::new(first),
            kind,
        }
    }

    // 用尽后一直报错，不会回绕成负数或重复的 id
    fn next(&self) -> Result<i64, StoreError> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map_err(|_| StoreError::IdsExhausted(self.kind))
    }
}

pub struct Store {
    users: DashMap<i64, User>,
    companies: DashMap<i64, Company>,
    notifications: DashMap<i64, Notification>,
    activities: DashMap<i64, Activity>,
    burnout_symptoms: DashMap<i64, BurnoutSymptoms>,
    user_ids: IdSequence,
    company_ids: IdSequence,
    notification_ids: IdSequence,
    activity_ids: IdSequence,
    // 注册时的唯一性检查和插入必须在同一把锁内完成
    registration: Mutex<()>,
}

impl Store {
    /// 创建存储并写入六家公司的种子数据
    pub fn new() -> Self {
        let store = Store {
            users: DashMap::new(),
            companies: DashMap::new(),
            notifications: DashMap::new(),
            activities: DashMap::new(),
            burnout_symptoms: DashMap::new(),
            user_ids: IdSequence::new("user"),
            company_ids: IdSequence::new("company"),
            notification_ids: IdSequence::new("notification"),
            activity_ids: IdSequence::new("activity"),
            registration: Mutex::new(()),
        };

        for company in seed::companies() {
            if let Err(e) = store.create_company(company) {
                tracing::error!("Failed to seed company: {}", e);
            }
        }
        tracing::debug!("Seeded {} companies", store.companies.len());

        store
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
