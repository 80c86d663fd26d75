//! Application state: the loaded document, the current selection, and its fields.
//!
//! Transitions:
//!   Idle -> Loading -> Loaded | LoadFailed
//!   LoadFailed -> Loading                       (retry)
//!   Loaded | OperationSelected -> OperationSelected   (select / re-select)

use crate::Result;
use crate::model::{self, DerivePolicy, FormField, OperationItem};
use crate::render::collect_submission;
use crate::spec::{Document, LoadError, Method, Operation, SpecSource};

use anyhow::{anyhow, bail};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub label: String,
    pub path: String,
    pub method: Method,
    pub fields: Vec<FormField>,
}

#[derive(Debug)]
pub enum State {
    Idle,
    Loading,
    Loaded(Document),
    LoadFailed(LoadError),
    OperationSelected {
        document: Document,
        selection: Selection,
    },
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::Idle => "idle",
            State::Loading => "loading",
            State::Loaded(_) => "loaded",
            State::LoadFailed(_) => "load-failed",
            State::OperationSelected { .. } => "operation-selected",
        }
    }
}

#[derive(Debug)]
pub struct Session {
    state: State,
    policy: DerivePolicy,
}

impl Session {
    pub fn new(policy: DerivePolicy) -> Self {
        Self {
            state: State::Idle,
            policy,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn policy(&self) -> &DerivePolicy {
        &self.policy
    }

    pub fn begin_load(&mut self) -> Result<()> {
        if !matches!(self.state, State::Idle | State::LoadFailed(_)) {
            bail!("cannot start loading while {}", self.state.name());
        }
        self.state = State::Loading;
        Ok(())
    }

    /// Apply a load result. Results arriving outside `Loading` are dropped;
    /// returns whether the result was applied.
    pub fn finish_load(&mut self, result: std::result::Result<Document, LoadError>) -> bool {
        if !matches!(self.state, State::Loading) {
            tracing::debug!(state = self.state.name(), "discarding late load result");
            return false;
        }

        self.state = match result {
            Ok(document) => {
                tracing::info!(paths = document.paths.len(), "specification loaded");
                State::Loaded(document)
            }
            Err(err) => {
                tracing::warn!(error = %err, "specification failed to load");
                State::LoadFailed(err)
            }
        };
        true
    }

    /// Blocking load from `source`: begin, fetch, finish.
    pub fn load(&mut self, source: &SpecSource, timeout: Duration) -> Result<()> {
        self.begin_load()?;
        self.finish_load(source.load(timeout));
        match &self.state {
            State::LoadFailed(err) => Err(anyhow!("load specification: {}", err)),
            _ => Ok(()),
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match &self.state {
            State::Loaded(document) | State::OperationSelected { document, .. } => Some(document),
            _ => None,
        }
    }

    /// Selectable operations; empty until a document is loaded.
    pub fn options(&self) -> Vec<OperationItem<'_>> {
        self.document()
            .map(|doc| model::enumerate(doc, &self.policy))
            .unwrap_or_default()
    }

    /// Select an operation by label and derive fresh fields for it.
    /// An unknown label leaves the current state untouched.
    pub fn select(&mut self, label: &str) -> Result<&[FormField]> {
        let Some(document) = self.document() else {
            bail!("no specification loaded (state: {})", self.state.name());
        };

        let selection = match model::find_by_label(document, &self.policy, label) {
            Some(item) => Selection {
                label: item.label(),
                path: item.path.to_string(),
                method: item.method,
                fields: model::derive_fields(item.operation, &self.policy),
            },
            None => bail!("unknown operation: {:?}", label),
        };
        tracing::debug!(
            operation = %selection.label,
            fields = selection.fields.len(),
            "operation selected"
        );

        self.state = match std::mem::replace(&mut self.state, State::Idle) {
            State::Loaded(document) | State::OperationSelected { document, .. } => {
                State::OperationSelected {
                    document,
                    selection,
                }
            }
            other => other,
        };

        match &self.state {
            State::OperationSelected { selection, .. } => Ok(&selection.fields),
            other => bail!("selection lost (state: {})", other.name()),
        }
    }

    /// The current selection and the operation it refers to.
    pub fn selected(&self) -> Option<(&Selection, &Operation)> {
        match &self.state {
            State::OperationSelected {
                document,
                selection,
            } => document
                .operation(&selection.path, selection.method)
                .map(|op| (selection, op)),
            _ => None,
        }
    }

    /// Collect submitted values for the selected operation and emit them.
    pub fn submit(&self, values: &[(String, String)]) -> Result<Vec<(String, String)>> {
        let Some((selection, _)) = self.selected() else {
            bail!("no operation selected");
        };

        let pairs = collect_submission(&selection.fields, values)?;
        for (name, value) in &pairs {
            tracing::info!(operation = %selection.label, name, value, "form value");
        }
        Ok(pairs)
    }
}
