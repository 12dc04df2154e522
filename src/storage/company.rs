use super::{Store, StoreError};
use crate::models::{Company, CompanyPatch, NewCompany};

impl Store {
    pub fn get_company(&self, id: i64) -> Option<Company> {
        self.companies.get(&id).map(|company| company.value().clone())
    }

    pub fn get_company_by_code(&self, code: &str) -> Option<Company> {
        self.companies
            .iter()
            .find(|company| company.code == code)
            .map(|company| company.value().clone())
    }

    /// 按 id 排序，即种子写入顺序
    pub fn list_companies(&self) -> Vec<Company> {
        let mut companies: Vec<Company> = self
            .companies
            .iter()
            .map(|company| company.value().clone())
            .collect();
        companies.sort_by_key(|company| company.id);
        companies
    }

    pub fn create_company(&self, new: NewCompany) -> Result<Company, StoreError> {
        let company = Company::from_new(self.company_ids.next()?, new);
        self.companies.insert(company.id, company.clone());
        Ok(company)
    }

    pub fn update_company(&self, id: i64, patch: CompanyPatch) -> Option<Company> {
        let mut company = self.companies.get_mut(&id)?;
        patch.apply(&mut *company);
        Some(company.value().clone())
    }
}
