//! SeaORM entities for the inventory tables
//!
//! Enum-valued columns are stored as their wire strings; the mappers in
//! `super::mapper` parse them back into contract enums.

/// Customers table
pub mod customer {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "customers")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Tax identifier, unique
        #[sea_orm(unique)]
        pub tax_id: String,

        pub name: String,
        pub address: String,
        pub kind: String,
        pub service_plan: String,
        pub status: String,
        pub admin_contact: Option<String>,
        pub tech_contact: Option<String>,
        pub contract_date: DateTimeUtc,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// A customer owns zero or more sites
        #[sea_orm(has_many = "super::site::Entity")]
        Sites,
    }

    impl Related<super::site::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Sites.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Sites table
pub mod site {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "sites")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,
        pub kind: String,
        pub address: String,
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,
        pub status: String,

        /// Optional owning customer
        pub customer_id: Option<i32>,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::customer::Entity",
            from = "Column::CustomerId",
            to = "super::customer::Column::Id"
        )]
        Customer,
        #[sea_orm(has_many = "super::equipment::Entity")]
        Equipment,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Customer.def()
        }
    }

    impl Related<super::equipment::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Equipment.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Links table
pub mod link {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "links")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub site_a_id: i32,
        pub site_b_id: i32,
        pub medium: String,
        pub fiber_strands: Option<i32>,
        pub copper_pairs: Option<i32>,
        pub bandwidth_mbps: Option<i32>,
        pub status: String,

        /// Flat backup pointer to another link
        pub redundant_link_id: Option<i32>,

        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::site::Entity",
            from = "Column::SiteAId",
            to = "super::site::Column::Id"
        )]
        SiteA,
        #[sea_orm(
            belongs_to = "super::site::Entity",
            from = "Column::SiteBId",
            to = "super::site::Column::Id"
        )]
        SiteB,
        #[sea_orm(
            belongs_to = "Entity",
            from = "Column::RedundantLinkId",
            to = "Column::Id"
        )]
        RedundantLink,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Equipment table
pub mod equipment {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "equipment")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Owning site, required
        pub site_id: i32,

        pub kind: String,
        pub manufacturer: String,
        pub model: String,

        /// Serial number, unique
        #[sea_orm(unique)]
        pub serial_number: String,

        pub asset_tag: String,
        pub status: String,
        pub installed_at: Option<DateTimeUtc>,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::site::Entity",
            from = "Column::SiteId",
            to = "super::site::Column::Id"
        )]
        Site,
    }

    impl Related<super::site::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Site.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
