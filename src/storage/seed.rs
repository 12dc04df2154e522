use indexmap::IndexMap;

use crate::models::NewCompany;

fn shares(pairs: &[(&str, i32)]) -> IndexMap<String, i32> {
    pairs
        .iter()
        .map(|(label, pct)| (label.to_string(), *pct))
        .collect()
}

fn destinations(startups: i32, big_tech: i32, freelance: i32, career_change: i32) -> IndexMap<String, i32> {
    shares(&[
        ("Startups", startups),
        ("Other Big Tech", big_tech),
        ("Freelance", freelance),
        ("Career Change", career_change),
    ])
}

/// 启动时写入的六家公司，顺序固定
pub(super) fn companies() -> Vec<NewCompany> {
    vec![
        NewCompany {
            name: "META".into(),
            code: "meta".into(),
            total_departures: 1247,
            avg_tenure: 28,
            weekly_trends: vec![30, 45, 38, 55, 60, 75, 85, 95],
            exit_reasons: shares(&[
                ("Toxic Culture", 43),
                ("Burnout", 27),
                ("Better Comp", 21),
                ("No Growth", 9),
            ]),
            destinations: destinations(38, 31, 17, 14),
        },
        NewCompany {
            name: "APPLE".into(),
            code: "apple".into(),
            total_departures: 843,
            avg_tenure: 36,
            weekly_trends: vec![20, 25, 30, 40, 38, 42, 48, 55],
            exit_reasons: shares(&[
                ("Work-Life Balance", 38),
                ("Management Issues", 29),
                ("Better Comp", 24),
                ("Relocation", 9),
            ]),
            destinations: destinations(32, 40, 13, 15),
        },
        NewCompany {
            name: "AMAZON".into(),
            code: "amazon".into(),
            total_departures: 1892,
            avg_tenure: 18,
            weekly_trends: vec![75, 80, 85, 90, 92, 87, 95, 98],
            exit_reasons: shares(&[
                ("PIP Culture", 47),
                ("Burnout", 32),
                ("Better WLB", 15),
                ("Relocation", 6),
            ]),
            destinations: destinations(29, 45, 16, 10),
        },
        NewCompany {
            name: "NETFLIX".into(),
            code: "netflix".into(),
            total_departures: 564,
            avg_tenure: 24,
            weekly_trends: vec![30, 28, 35, 42, 45, 50, 55, 60],
            exit_reasons: shares(&[
                ("Keeper Test", 41),
                ("Stress", 26),
                ("Better Offer", 22),
                ("Relocation", 11),
            ]),
            destinations: destinations(42, 35, 13, 10),
        },
        NewCompany {
            name: "GOOGLE".into(),
            code: "google".into(),
            total_departures: 1053,
            avg_tenure: 40,
            weekly_trends: vec![35, 40, 42, 48, 52, 58, 60, 65],
            exit_reasons: shares(&[
                ("Slow Growth", 35),
                ("Better Opportunity", 30),
                ("Burnout", 22),
                ("Layoffs", 13),
            ]),
            destinations: destinations(45, 32, 15, 8),
        },
        NewCompany {
            name: "MICROSOFT".into(),
            code: "microsoft".into(),
            total_departures: 987,
            avg_tenure: 42,
            weekly_trends: vec![25, 28, 32, 36, 40, 43, 45, 50],
            exit_reasons: shares(&[
                ("Reorganization", 32),
                ("Better Offer", 28),
                ("Burnout", 25),
                ("Relocation", 15),
            ]),
            destinations: destinations(30, 42, 18, 10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_sum_to_one_hundred() {
        for company in companies() {
            assert_eq!(company.exit_reasons.values().sum::<i32>(), 100, "{}", company.code);
            assert_eq!(company.destinations.values().sum::<i32>(), 100, "{}", company.code);
            assert_eq!(company.weekly_trends.len(), 8);
        }
    }
}
