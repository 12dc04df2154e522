use chrono::Utc;

use super::{Store, StoreError};
use crate::models::{BurnoutSymptoms, NewUser, User, UserPatch, user::DEFAULT_BURNOUT_SCORE};

impl Store {
    pub fn get_user(&self, id: i64) -> Option<User> {
        self.users.get(&id).map(|user| user.value().clone())
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.email == email)
            .map(|user| user.value().clone())
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.value().clone())
    }

    /// 直接插入用户并生成对应的倦怠症状，不检查唯一性
    pub fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let id = self.user_ids.next()?;
        let user = User {
            id,
            username: new.username,
            email: new.email,
            password_hash: new.password_hash,
            display_name: new.display_name,
            company: new.company,
            burnout_score: new.burnout_score.unwrap_or(DEFAULT_BURNOUT_SCORE),
            avatar_initials: new.avatar_initials,
            joined_at: Utc::now(),
        };

        // 先写症状，保证能查到的用户一定有症状记录
        let symptoms = BurnoutSymptoms::random(&mut rand::thread_rng());
        self.burnout_symptoms.insert(id, symptoms);
        self.users.insert(id, user.clone());

        tracing::info!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    /// 邮箱和用户名都未被占用时才插入，检查与插入在同一把锁内
    pub fn insert_user_if_unique(&self, new: NewUser) -> Result<User, StoreError> {
        let _guard = self
            .registration
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(violation) = self.registration_conflict(&new.email, &new.username) {
            return Err(violation);
        }

        self.create_user(new)
    }

    /// 先查邮箱再查用户名，返回第一个冲突
    pub fn registration_conflict(&self, email: &str, username: &str) -> Option<StoreError> {
        if self.get_user_by_email(email).is_some() {
            Some(StoreError::DuplicateEmail)
        } else if self.get_user_by_username(username).is_some() {
            Some(StoreError::DuplicateUsername)
        } else {
            None
        }
    }

    pub fn update_user(&self, id: i64, patch: UserPatch) -> Option<User> {
        let mut user = self.users.get_mut(&id)?;
        patch.apply(&mut *user);
        Some(user.value().clone())
    }

    /// 按 burnout_score 降序，分数相同时先注册的在前
    pub fn top_users_by_burnout(&self, limit: usize) -> Vec<User> {
        let mut users: Vec<User> = self.users.iter().map(|user| user.value().clone()).collect();
        users.sort_by(|a, b| {
            b.burnout_score
                .cmp(&a.burnout_score)
                .then(a.id.cmp(&b.id))
        });
        users.truncate(limit);
        users
    }

    pub fn burnout_symptoms(&self, user_id: i64) -> Option<BurnoutSymptoms> {
        self.burnout_symptoms.get(&user_id).map(|symptoms| *symptoms.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.into(),
            email: email.into(),
            password_hash: "hash".into(),
            display_name: username.to_uppercase(),
            company: "meta".into(),
            burnout_score: None,
            avatar_initials: "XX".into(),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = Store::new();
        let first = store.create_user(new_user("a", "a@meta.com")).unwrap();
        let second = store.create_user(new_user("b", "b@meta.com")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.burnout_score, 50);
    }

    #[test]
    fn every_user_gets_symptoms() {
        let store = Store::new();
        let user = store.create_user(new_user("a", "a@meta.com")).unwrap();
        let symptoms = store.burnout_symptoms(user.id).unwrap();
        assert!((50..90).contains(&symptoms.mental_exhaustion));
        assert!((30..60).contains(&symptoms.productivity));
        assert!(store.burnout_symptoms(user.id + 1).is_none());
    }

    #[test]
    fn lookups_are_exact_matches() {
        let store = Store::new();
        store.create_user(new_user("neo", "neo@meta.com")).unwrap();
        assert!(store.get_user_by_email("neo@meta.com").is_some());
        assert!(store.get_user_by_email("NEO@meta.com").is_none());
        assert!(store.get_user_by_username("neo").is_some());
        assert!(store.get_user_by_username("trinity").is_none());
    }

    #[test]
    fn unique_insert_rejects_duplicates() {
        let store = Store::new();
        store.insert_user_if_unique(new_user("neo", "neo@meta.com")).unwrap();

        let dup_email = store.insert_user_if_unique(new_user("other", "neo@meta.com"));
        assert_eq!(dup_email.unwrap_err(), StoreError::DuplicateEmail);

        let dup_name = store.insert_user_if_unique(new_user("neo", "other@meta.com"));
        assert_eq!(dup_name.unwrap_err(), StoreError::DuplicateUsername);

        assert_eq!(store.top_users_by_burnout(100).len(), 1);
    }

    #[test]
    fn concurrent_registration_admits_one() {
        let store = std::sync::Arc::new(Store::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store
                        .insert_user_if_unique(new_user(&format!("u{i}"), "same@meta.com"))
                        .is_ok()
                })
            })
            .collect();
        let created = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(created, 1);
    }

    #[test]
    fn update_only_touches_patchable_fields() {
        let store = Store::new();
        let user = store.create_user(new_user("neo", "neo@meta.com")).unwrap();
        let updated = store
            .update_user(
                user.id,
                UserPatch {
                    display_name: Some("The One".into()),
                    burnout_score: Some(99),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.joined_at, user.joined_at);
        assert_eq!(updated.display_name, "The One");
        assert_eq!(updated.burnout_score, 99);
        assert_eq!(updated.company, "meta");
        assert!(store.update_user(42, UserPatch::default()).is_none());
    }

    #[test]
    fn leaderboard_is_sorted_and_stable() {
        let store = Store::new();
        for (name, score) in [("a", 40), ("b", 80), ("c", 80), ("d", 95)] {
            let mut user = new_user(name, &format!("{name}@meta.com"));
            user.burnout_score = Some(score);
            store.create_user(user).unwrap();
        }
        let top: Vec<String> = store
            .top_users_by_burnout(3)
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(top, vec!["d", "b", "c"]);
    }
}
