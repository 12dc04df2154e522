use chrono::Utc;

use super::{Store, StoreError};
use crate::models::{Activity, NewActivity};

impl Store {
    pub fn recent_activities(&self, limit: usize) -> Vec<Activity> {
        self.sorted_activities(|_| true, limit)
    }

    pub fn user_activities(&self, user_id: i64, limit: usize) -> Vec<Activity> {
        self.sorted_activities(|activity| activity.user_id == user_id, limit)
    }

    pub fn create_activity(&self, new: NewActivity) -> Result<Activity, StoreError> {
        let activity = Activity {
            id: self.activity_ids.next()?,
            user_id: new.user_id,
            content: new.content,
            tags: new.tags,
            likes: new.likes,
            comments: new.comments,
            shares: new.shares,
            created_at: Utc::now(),
        };
        self.activities.insert(activity.id, activity.clone());
        Ok(activity)
    }

    // 最新的在前，时间相同按 id 倒序
    fn sorted_activities(&self, keep: impl Fn(&Activity) -> bool, limit: usize) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .activities
            .iter()
            .filter(|activity| keep(activity.value()))
            .map(|activity| activity.value().clone())
            .collect();
        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        activities.truncate(limit);
        activities
    }
}
