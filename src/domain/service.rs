//! Domain service - validation, referential checks, and store orchestration

use super::repository::{RepoError, Repository};
use super::validation;
use crate::contract::{
    Customer, CustomerDraft, CustomerStatus, Equipment, EquipmentDraft, InventoryError,
    InventoryStats, Link, LinkDraft, Site, SiteDraft, SiteStatus,
};
use std::sync::Arc;

/// Pagination bounds applied to every list operation
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Window size used when the caller gives none
    pub default_limit: u64,
    /// Hard cap on the window size
    pub max_limit: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: 100,
            max_limit: 1000,
        }
    }
}

/// Domain service for the inventory.
///
/// Holds one repository handle per entity kind, all injected; there is no
/// shared mutable state beyond the store itself.
pub struct InventoryService {
    customers: Arc<dyn Repository<Customer, CustomerDraft>>,
    sites: Arc<dyn Repository<Site, SiteDraft>>,
    links: Arc<dyn Repository<Link, LinkDraft>>,
    equipment: Arc<dyn Repository<Equipment, EquipmentDraft>>,
    limits: PageLimits,
}

impl InventoryService {
    pub fn new(
        customers: Arc<dyn Repository<Customer, CustomerDraft>>,
        sites: Arc<dyn Repository<Site, SiteDraft>>,
        links: Arc<dyn Repository<Link, LinkDraft>>,
        equipment: Arc<dyn Repository<Equipment, EquipmentDraft>>,
        limits: PageLimits,
    ) -> Self {
        Self {
            customers,
            sites,
            links,
            equipment,
            limits,
        }
    }

    fn window(&self, skip: Option<u64>, limit: Option<u64>) -> (u64, u64) {
        let skip = skip.unwrap_or(0);
        let limit = limit
            .unwrap_or(self.limits.default_limit)
            .min(self.limits.max_limit);
        (skip, limit)
    }

    // ===== Customer operations =====

    pub async fn create_customer(&self, draft: CustomerDraft) -> Result<Customer, InventoryError> {
        validation::check_customer(&draft)?;
        let customer = self
            .customers
            .insert(&draft)
            .await
            .map_err(|e| map_write_err("customer", e))?;
        tracing::info!(id = customer.id, tax_id = %customer.tax_id, "customer created");
        Ok(customer)
    }

    pub async fn get_customer(&self, id: i32) -> Result<Customer, InventoryError> {
        self.customers
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(InventoryError::not_found("customer", id))
    }

    pub async fn list_customers(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Customer>, InventoryError> {
        let (skip, limit) = self.window(skip, limit);
        self.customers.list(skip, limit).await.map_err(internal)
    }

    pub async fn update_customer(
        &self,
        id: i32,
        draft: CustomerDraft,
    ) -> Result<Customer, InventoryError> {
        validation::check_customer(&draft)?;
        self.customers
            .replace(id, &draft)
            .await
            .map_err(|e| map_write_err("customer", e))?
            .ok_or(InventoryError::not_found("customer", id))
    }

    pub async fn delete_customer(&self, id: i32) -> Result<(), InventoryError> {
        let removed = self
            .customers
            .remove(id)
            .await
            .map_err(|e| map_delete_err("customer", e))?;
        if removed {
            tracing::info!(id, "customer deleted");
            Ok(())
        } else {
            Err(InventoryError::not_found("customer", id))
        }
    }

    // ===== Site operations =====

    pub async fn create_site(&self, draft: SiteDraft) -> Result<Site, InventoryError> {
        validation::check_site(&draft)?;
        self.check_site_references(&draft).await?;
        let site = self
            .sites
            .insert(&draft)
            .await
            .map_err(|e| map_write_err("site", e))?;
        tracing::info!(id = site.id, name = %site.name, "site created");
        Ok(site)
    }

    pub async fn get_site(&self, id: i32) -> Result<Site, InventoryError> {
        self.sites
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(InventoryError::not_found("site", id))
    }

    pub async fn list_sites(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Site>, InventoryError> {
        let (skip, limit) = self.window(skip, limit);
        self.sites.list(skip, limit).await.map_err(internal)
    }

    pub async fn update_site(&self, id: i32, draft: SiteDraft) -> Result<Site, InventoryError> {
        validation::check_site(&draft)?;
        self.check_site_references(&draft).await?;
        self.sites
            .replace(id, &draft)
            .await
            .map_err(|e| map_write_err("site", e))?
            .ok_or(InventoryError::not_found("site", id))
    }

    pub async fn delete_site(&self, id: i32) -> Result<(), InventoryError> {
        let removed = self
            .sites
            .remove(id)
            .await
            .map_err(|e| map_delete_err("site", e))?;
        if removed {
            tracing::info!(id, "site deleted");
            Ok(())
        } else {
            Err(InventoryError::not_found("site", id))
        }
    }

    /// Owning customer, if set, must exist
    async fn check_site_references(&self, draft: &SiteDraft) -> Result<(), InventoryError> {
        if let Some(customer_id) = draft.customer_id {
            if !self.customers.exists(customer_id).await.map_err(internal)? {
                return Err(InventoryError::constraint(format!(
                    "customer_id references missing customer {customer_id}"
                )));
            }
        }
        Ok(())
    }

    // ===== Link operations =====

    pub async fn create_link(&self, draft: LinkDraft) -> Result<Link, InventoryError> {
        validation::check_link(&draft)?;
        self.check_link_references(&draft).await?;
        let link = self
            .links
            .insert(&draft)
            .await
            .map_err(|e| map_write_err("link", e))?;
        tracing::info!(
            id = link.id,
            site_a = link.site_a_id,
            site_b = link.site_b_id,
            "link created"
        );
        Ok(link)
    }

    pub async fn get_link(&self, id: i32) -> Result<Link, InventoryError> {
        self.links
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(InventoryError::not_found("link", id))
    }

    pub async fn list_links(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Link>, InventoryError> {
        let (skip, limit) = self.window(skip, limit);
        self.links.list(skip, limit).await.map_err(internal)
    }

    pub async fn update_link(&self, id: i32, draft: LinkDraft) -> Result<Link, InventoryError> {
        validation::check_link(&draft)?;
        self.check_link_references(&draft).await?;
        self.links
            .replace(id, &draft)
            .await
            .map_err(|e| map_write_err("link", e))?
            .ok_or(InventoryError::not_found("link", id))
    }

    pub async fn delete_link(&self, id: i32) -> Result<(), InventoryError> {
        let removed = self
            .links
            .remove(id)
            .await
            .map_err(|e| map_delete_err("link", e))?;
        if removed {
            tracing::info!(id, "link deleted");
            Ok(())
        } else {
            Err(InventoryError::not_found("link", id))
        }
    }

    /// Both endpoints must exist; the redundant-link pointer, if set, must
    /// resolve. No symmetry or cycle rule - it is a flat pointer.
    async fn check_link_references(&self, draft: &LinkDraft) -> Result<(), InventoryError> {
        for (field, site_id) in [("site_a_id", draft.site_a_id), ("site_b_id", draft.site_b_id)] {
            if !self.sites.exists(site_id).await.map_err(internal)? {
                return Err(InventoryError::constraint(format!(
                    "{field} references missing site {site_id}"
                )));
            }
        }
        if let Some(link_id) = draft.redundant_link_id {
            if !self.links.exists(link_id).await.map_err(internal)? {
                return Err(InventoryError::constraint(format!(
                    "redundant_link_id references missing link {link_id}"
                )));
            }
        }
        Ok(())
    }

    // ===== Equipment operations =====

    pub async fn create_equipment(
        &self,
        draft: EquipmentDraft,
    ) -> Result<Equipment, InventoryError> {
        validation::check_equipment(&draft)?;
        self.check_equipment_references(&draft).await?;
        let equipment = self
            .equipment
            .insert(&draft)
            .await
            .map_err(|e| map_write_err("equipment", e))?;
        tracing::info!(
            id = equipment.id,
            serial = %equipment.serial_number,
            "equipment created"
        );
        Ok(equipment)
    }

    pub async fn get_equipment(&self, id: i32) -> Result<Equipment, InventoryError> {
        self.equipment
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(InventoryError::not_found("equipment", id))
    }

    pub async fn list_equipment(
        &self,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<Equipment>, InventoryError> {
        let (skip, limit) = self.window(skip, limit);
        self.equipment.list(skip, limit).await.map_err(internal)
    }

    pub async fn update_equipment(
        &self,
        id: i32,
        draft: EquipmentDraft,
    ) -> Result<Equipment, InventoryError> {
        validation::check_equipment(&draft)?;
        self.check_equipment_references(&draft).await?;
        self.equipment
            .replace(id, &draft)
            .await
            .map_err(|e| map_write_err("equipment", e))?
            .ok_or(InventoryError::not_found("equipment", id))
    }

    pub async fn delete_equipment(&self, id: i32) -> Result<(), InventoryError> {
        let removed = self
            .equipment
            .remove(id)
            .await
            .map_err(|e| map_delete_err("equipment", e))?;
        if removed {
            tracing::info!(id, "equipment deleted");
            Ok(())
        } else {
            Err(InventoryError::not_found("equipment", id))
        }
    }

    /// Owning site must exist
    async fn check_equipment_references(
        &self,
        draft: &EquipmentDraft,
    ) -> Result<(), InventoryError> {
        if !self.sites.exists(draft.site_id).await.map_err(internal)? {
            return Err(InventoryError::constraint(format!(
                "site_id references missing site {}",
                draft.site_id
            )));
        }
        Ok(())
    }

    // ===== Aggregate statistics =====

    /// Six counts over the store, recomputed fresh on every call
    pub async fn stats(&self) -> Result<InventoryStats, InventoryError> {
        Ok(InventoryStats {
            customers: self.customers.count_all().await.map_err(internal)?,
            active_customers: self
                .customers
                .count_by_status(CustomerStatus::Active.as_str())
                .await
                .map_err(internal)?,
            sites: self.sites.count_all().await.map_err(internal)?,
            active_sites: self
                .sites
                .count_by_status(SiteStatus::Active.as_str())
                .await
                .map_err(internal)?,
            links: self.links.count_all().await.map_err(internal)?,
            equipment: self.equipment.count_all().await.map_err(internal)?,
        })
    }
}

/// Insert/replace failures: unique and FK breaks become constraint errors,
/// anything else is internal. The pre-checks above usually catch FK problems
/// first with a friendlier message; the database constraint is the guarantee
/// under concurrent writes.
fn map_write_err(resource: &'static str, err: RepoError) -> InventoryError {
    match err {
        RepoError::UniqueViolation(detail) => {
            InventoryError::constraint(format!("{resource} violates a unique field: {detail}"))
        }
        RepoError::ForeignKeyViolation(detail) => {
            InventoryError::constraint(format!("{resource} references a missing row: {detail}"))
        }
        RepoError::Backend(e) => {
            tracing::error!(resource, error = %e, "store write failed");
            InventoryError::Internal
        }
    }
}

/// Delete failures: a FK break means the row is still referenced
/// (restrict-if-referenced policy, no cascade).
fn map_delete_err(resource: &'static str, err: RepoError) -> InventoryError {
    match err {
        RepoError::ForeignKeyViolation(_) => InventoryError::constraint(format!(
            "{resource} is still referenced by dependent records"
        )),
        RepoError::UniqueViolation(detail) => {
            InventoryError::constraint(format!("{resource}: {detail}"))
        }
        RepoError::Backend(e) => {
            tracing::error!(resource, error = %e, "store delete failed");
            InventoryError::Internal
        }
    }
}

fn internal(err: RepoError) -> InventoryError {
    tracing::error!(error = %err, "store read failed");
    InventoryError::Internal
}
