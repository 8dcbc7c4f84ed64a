//! Reference tables (communes, mission types, equipment, ...).

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use vigil_core::Result;
use vigil_core::models::{
    Certification, Commune, Equipement, ReferenceDocumentType, SousTypeMission, Specialisation,
    TypeIncident, TypeMission,
};

use crate::client::ApiClient;
use crate::endpoints::reference;

/// The reference collections administered from the back-office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceTable {
    Communes,
    TypesIncidents,
    TypesMissions,
    SousTypesMissions,
    Equipements,
    Certifications,
    Specialisations,
    DocumentTypes,
}

impl ReferenceTable {
    pub const ALL: [ReferenceTable; 8] = [
        ReferenceTable::Communes,
        ReferenceTable::TypesIncidents,
        ReferenceTable::TypesMissions,
        ReferenceTable::SousTypesMissions,
        ReferenceTable::Equipements,
        ReferenceTable::Certifications,
        ReferenceTable::Specialisations,
        ReferenceTable::DocumentTypes,
    ];

    /// Collection path.
    pub fn path(&self) -> &'static str {
        match self {
            ReferenceTable::Communes => reference::COMMUNES,
            ReferenceTable::TypesIncidents => reference::TYPES_INCIDENTS,
            ReferenceTable::TypesMissions => reference::TYPES_MISSIONS,
            ReferenceTable::SousTypesMissions => reference::SOUS_TYPES_MISSIONS,
            ReferenceTable::Equipements => reference::EQUIPEMENTS,
            ReferenceTable::Certifications => reference::CERTIFICATIONS,
            ReferenceTable::Specialisations => reference::SPECIALISATIONS,
            ReferenceTable::DocumentTypes => reference::DOCUMENT_TYPES,
        }
    }

    /// Path of one entry.
    pub fn entry(&self, id: &str) -> String {
        reference::entry(self.path(), id)
    }
}

impl fmt::Display for ReferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches("/reference/"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReferenceService<'a> {
    client: &'a ApiClient,
}

impl<'a> ReferenceService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every entry of a table.
    pub async fn list<T: DeserializeOwned>(&self, table: ReferenceTable) -> Result<Vec<T>> {
        self.client.get(table.path()).await
    }

    pub async fn create<B, T>(&self, table: ReferenceTable, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client.post(table.path(), body).await
    }

    pub async fn update<B, T>(&self, table: ReferenceTable, id: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client.put(&table.entry(id), body).await
    }

    pub async fn delete(&self, table: ReferenceTable, id: &str) -> Result<()> {
        self.client.delete(&table.entry(id)).await
    }

    pub async fn communes(&self) -> Result<Vec<Commune>> {
        self.list(ReferenceTable::Communes).await
    }

    pub async fn types_incidents(&self) -> Result<Vec<TypeIncident>> {
        self.list(ReferenceTable::TypesIncidents).await
    }

    pub async fn types_missions(&self) -> Result<Vec<TypeMission>> {
        self.list(ReferenceTable::TypesMissions).await
    }

    pub async fn sous_types_missions(&self) -> Result<Vec<SousTypeMission>> {
        self.list(ReferenceTable::SousTypesMissions).await
    }

    pub async fn equipements(&self) -> Result<Vec<Equipement>> {
        self.list(ReferenceTable::Equipements).await
    }

    pub async fn certifications(&self) -> Result<Vec<Certification>> {
        self.list(ReferenceTable::Certifications).await
    }

    pub async fn specialisations(&self) -> Result<Vec<Specialisation>> {
        self.list(ReferenceTable::Specialisations).await
    }

    pub async fn document_types(&self) -> Result<Vec<ReferenceDocumentType>> {
        self.list(ReferenceTable::DocumentTypes).await
    }
}
