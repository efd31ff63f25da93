//! Keyed invalidation for page loaders.
//!
//! Loaders read the generation of their key inside an effect; a mutation
//! bumps the generation, which re-runs every loader tracking that key.

use std::collections::HashMap;

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Zones,
    Zone(String),
    DnsRecords(String),
    Account,
    GoogleLoginUrl,
}

#[derive(Clone, Debug, Default)]
pub struct QueryGenerations {
    generations: HashMap<QueryKey, u64>,
}

impl QueryGenerations {
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.generations.get(key).copied().unwrap_or(0)
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        *self.generations.entry(key.clone()).or_insert(0) += 1;
    }
}

#[derive(Clone, Copy)]
pub struct QueryClient {
    generations: RwSignal<QueryGenerations>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            generations: RwSignal::new(QueryGenerations::default()),
        }
    }

    /// Tracked read; call it inside the effect that loads `key`.
    pub fn generation(&self, key: &QueryKey) -> u64 {
        self.generations.with(|g| g.generation(key))
    }

    pub fn invalidate(&self, key: QueryKey) {
        self.generations.update(|g| g.invalidate(&key));
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_query_client() {
    provide_context(QueryClient::new());
}

pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_only_bumps_its_key() {
        let mut generations = QueryGenerations::default();
        let records = QueryKey::DnsRecords("example.com".into());
        generations.invalidate(&records);
        generations.invalidate(&records);

        assert_eq!(generations.generation(&records), 2);
        assert_eq!(generations.generation(&QueryKey::DnsRecords("other.org".into())), 0);
        assert_eq!(generations.generation(&QueryKey::Zones), 0);
    }

    #[test]
    fn tracked_generation_follows_invalidation() {
        let owner = Owner::new();
        owner.with(|| {
            let queries = QueryClient::new();
            let records = QueryKey::DnsRecords("example.com".into());
            let recordsGeneration = Memo::new({
                let records = records.clone();
                move |_| queries.generation(&records)
            });
            let accountGeneration = Memo::new(move |_| queries.generation(&QueryKey::Account));
            assert_eq!(recordsGeneration.get_untracked(), 0);

            queries.invalidate(records);
            assert_eq!(recordsGeneration.get_untracked(), 1);
            assert_eq!(accountGeneration.get_untracked(), 0);
        });
    }
}
