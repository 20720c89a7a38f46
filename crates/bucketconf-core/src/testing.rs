//! In-memory provider and scripted prompter used by unit tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{PromptError, ProviderError};
use crate::prompt::{Prompter, Question};
use crate::provider::BucketProvider;
use crate::types::{AccessGrant, RegionId};

/// Provider answering from fixed tables.
#[derive(Debug, Default)]
pub struct StaticProvider {
    buckets: HashMap<String, Vec<String>>,
    failing_regions: HashSet<String>,
    grants: HashMap<String, Vec<AccessGrant>>,
    list_calls: AtomicUsize,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: &str, buckets: &[&str]) -> Self {
        self.buckets.insert(
            region.to_owned(),
            buckets.iter().map(|b| (*b).to_owned()).collect(),
        );
        self
    }

    pub fn with_failing_region(mut self, region: &str) -> Self {
        self.failing_regions.insert(region.to_owned());
        self
    }

    pub fn with_grants(mut self, bucket: &str, grants: Vec<AccessGrant>) -> Self {
        self.grants.insert(bucket.to_owned(), grants);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BucketProvider for StaticProvider {
    async fn list_buckets(&self, region: &RegionId) -> Result<Vec<String>, ProviderError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        // Interleave completions so order-preservation is actually exercised.
        tokio::task::yield_now().await;
        if self.failing_regions.contains(region.as_str()) {
            return Err(ProviderError::ListBuckets {
                region: region.clone(),
                message: "region not enabled".to_owned(),
            });
        }
        Ok(self.buckets.get(region.as_str()).cloned().unwrap_or_default())
    }

    async fn get_bucket_location(
        &self,
        bucket: &str,
        region: &RegionId,
    ) -> Result<Value, ProviderError> {
        if self.grants.contains_key(bucket) {
            Ok(json!({"LocationConstraint": region.as_str()}))
        } else {
            Err(ProviderError::GetBucketLocation {
                bucket: bucket.to_owned(),
                region: region.clone(),
                message: "NoSuchBucket".to_owned(),
            })
        }
    }

    async fn get_bucket_acl(
        &self,
        bucket: &str,
        region: &RegionId,
    ) -> Result<Vec<AccessGrant>, ProviderError> {
        self.grants
            .get(bucket)
            .cloned()
            .ok_or_else(|| ProviderError::GetBucketAcl {
                bucket: bucket.to_owned(),
                region: region.clone(),
                message: "NoSuchBucket".to_owned(),
            })
    }
}

/// Prompter replaying canned answers and recording what it was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Vec<usize>>,
    pub asked: Vec<Vec<Question>>,
    pub notices: Vec<String>,
    interrupt_when_exhausted: bool,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Vec<usize>>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    pub fn interrupting(answers: Vec<Vec<usize>>) -> Self {
        Self {
            interrupt_when_exhausted: true,
            ..Self::new(answers)
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, questions: &[Question]) -> Result<Vec<usize>, PromptError> {
        self.asked.push(questions.to_vec());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None if self.interrupt_when_exhausted => Err(PromptError::Interrupted),
            None => panic!("prompter ran out of answers after {} rounds", self.asked.len()),
        }
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        self.notices.push(message.to_owned());
        Ok(())
    }
}

/// The grant list used across tests.
pub fn owner_grants() -> Vec<AccessGrant> {
    vec![json!({"grantee": "owner", "permission": "FULL_CONTROL"})]
}
