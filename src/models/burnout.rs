use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BurnoutSymptoms {
    pub mental_exhaustion: i32,
    pub work_cynicism: i32,
    pub sunday_anxiety: i32,
    pub productivity: i32,
}

impl BurnoutSymptoms {
    /// 注册时随机生成：前三项取 [50, 90)，productivity 取 [30, 60)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        BurnoutSymptoms {
            mental_exhaustion: rng.gen_range(50..90),
            work_cynicism: rng.gen_range(50..90),
            sunday_anxiety: rng.gen_range(50..90),
            productivity: rng.gen_range(30..60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_symptoms_stay_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let s = BurnoutSymptoms::random(&mut rng);
            assert!((50..90).contains(&s.mental_exhaustion));
            assert!((50..90).contains(&s.work_cynicism));
            assert!((50..90).contains(&s.sunday_anxiety));
            assert!((30..60).contains(&s.productivity));
        }
    }
}
