use recruitment_core::{
    Competence, CompetenceCatalog, CompetenceCatalogError, ErrorKind, StorageError,
    TransactionalStorage,
};

/// Error types for the competence catalog listing use case
#[derive(Debug, thiserror::Error)]
pub enum ListCompetencesError {
    #[error("competence catalog error: {0}")]
    Catalog(#[from] CompetenceCatalogError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ListCompetencesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListCompetencesError::Catalog(e) => e.kind(),
            ListCompetencesError::Storage(e) => e.kind(),
        }
    }
}

/// Competence catalog listing - the rows applicants pick their claims from.
pub struct ListCompetencesUseCase<S, G>
where
    S: TransactionalStorage,
    G: CompetenceCatalog<Tx = S::Tx>,
{
    storage: S,
    catalog: G,
}

impl<S, G> ListCompetencesUseCase<S, G>
where
    S: TransactionalStorage,
    G: CompetenceCatalog<Tx = S::Tx>,
{
    pub fn new(storage: S, catalog: G) -> Self {
        Self { storage, catalog }
    }

    #[tracing::instrument(name = "ListCompetencesUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<Vec<Competence>, ListCompetencesError> {
        let mut tx = self.storage.begin().await?;
        match self.catalog.get_all(&mut tx).await {
            Ok(competences) => {
                self.storage.commit(tx).await?;
                Ok(competences)
            }
            Err(error) => {
                if let Err(rollback_error) = self.storage.rollback(tx).await {
                    tracing::warn!(error = %rollback_error, "rollback after failed catalog read");
                }
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockCompetenceCatalog, MockStorage};

    #[tokio::test]
    async fn test_catalog_listing() {
        let items = vec![
            Competence {
                id: 1,
                name: "ticket sales".to_string(),
            },
            Competence {
                id: 2,
                name: "lotteries".to_string(),
            },
        ];
        let use_case = ListCompetencesUseCase::new(
            MockStorage::default(),
            MockCompetenceCatalog::with_items(items.clone()),
        );

        let competences = use_case.execute().await.unwrap();
        assert_eq!(competences, items);
    }
}
