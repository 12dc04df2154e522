use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub total_departures: i32,
    /// 平均在职时长（月）
    pub avg_tenure: i32,
    pub weekly_trends: Vec<i32>,
    pub exit_reasons: IndexMap<String, i32>,
    pub destinations: IndexMap<String, i32>,
}

#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub code: String,
    pub total_departures: i32,
    pub avg_tenure: i32,
    pub weekly_trends: Vec<i32>,
    pub exit_reasons: IndexMap<String, i32>,
    pub destinations: IndexMap<String, i32>,
}

#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub total_departures: Option<i32>,
    pub avg_tenure: Option<i32>,
    pub weekly_trends: Option<Vec<i32>>,
    pub exit_reasons: Option<IndexMap<String, i32>>,
    pub destinations: Option<IndexMap<String, i32>>,
}

impl Company {
    pub(crate) fn from_new(id: i64, new: NewCompany) -> Self {
        Company {
            id,
            name: new.name,
            code: new.code,
            total_departures: new.total_departures,
            avg_tenure: new.avg_tenure,
            weekly_trends: new.weekly_trends,
            exit_reasons: new.exit_reasons,
            destinations: new.destinations,
        }
    }
}

impl CompanyPatch {
    pub(crate) fn apply(self, company: &mut Company) {
        if let Some(name) = self.name {
            company.name = name;
        }
        if let Some(code) = self.code {
            company.code = code;
        }
        if let Some(total) = self.total_departures {
            company.total_departures = total;
        }
        if let Some(tenure) = self.avg_tenure {
            company.avg_tenure = tenure;
        }
        if let Some(trends) = self.weekly_trends {
            company.weekly_trends = trends;
        }
        if let Some(reasons) = self.exit_reasons {
            company.exit_reasons = reasons;
        }
        if let Some(destinations) = self.destinations {
            company.destinations = destinations;
        }
    }
}
