//! Feed session - filter state plus the latest query result
//!
//! A feed screen edits its filters, and every edit schedules a fresh query.
//! Queries are fire-and-forget: the session hands out a `QueryTicket`, the
//! host runs it however it likes, and passes the outcome back through
//! `resolve`. Only the ticket for the latest input snapshot is accepted.
//!
//! # Workflow
//!
//! ```text
//! set_search_term / set_category / ... ──→ QueryTicket (generation N)
//!                                             ↓
//!                                 host runs ticket.query
//!                                             ↓
//! resolve(ticket, result) ──→ generation == N ? apply : discard
//! ```

use crate::catalog::{CatalogError, CatalogItem, CatalogSource, Category, OwnerType, Size};
use crate::feed::filter::FilterCriteria;
use crate::feed::query::{FeedQuery, segment_items};

/// A query issued for one input snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    pub query: FeedQuery,
}

impl QueryTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Retrieval state of the feed
#[derive(Debug, Default)]
pub enum QueryState {
    /// A query is in flight; there is no result to show yet
    #[default]
    Pending,
    /// The latest query resolved (possibly to nothing)
    Ready(Vec<CatalogItem>),
    /// The latest query failed
    Failed(CatalogError),
}

/// What the rendering layer sees
#[derive(Debug, Clone, Copy)]
pub struct FeedSnapshot<'a> {
    /// `None` while loading or after a failure
    pub items: Option<&'a [CatalogItem]>,
    pub is_loading: bool,
    pub error: Option<&'a CatalogError>,
}

impl FeedSnapshot<'_> {
    /// Resolved successfully with nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_some_and(<[CatalogItem]>::is_empty)
    }
}

/// Filter state and results of one feed screen
#[derive(Debug)]
pub struct FeedSession {
    criteria: FilterCriteria,
    segment: Option<OwnerType>,
    generation: u64,
    in_flight: FeedQuery,
    state: QueryState,
}

impl FeedSession {
    /// Start a session; the initial query is pending until resolved
    #[must_use]
    pub fn new(criteria: FilterCriteria, segment: Option<OwnerType>) -> Self {
        let in_flight = FeedQuery::from_criteria(&criteria);
        Self {
            criteria,
            segment,
            generation: 0,
            in_flight,
            state: QueryState::Pending,
        }
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn segment(&self) -> Option<OwnerType> {
        self.segment
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    /// Ticket for the current input snapshot
    ///
    /// Issuing it again does not supersede anything; use it to (re)run the
    /// query that is already pending.
    #[must_use]
    pub fn current_ticket(&self) -> QueryTicket {
        QueryTicket {
            generation: self.generation,
            query: self.in_flight.clone(),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> QueryTicket {
        self.criteria.search_term = term.into();
        self.recompose()
    }

    pub fn set_category(&mut self, category: Option<Category>) -> QueryTicket {
        self.criteria.category = category;
        self.recompose()
    }

    pub fn set_size(&mut self, size: Option<Size>) -> QueryTicket {
        self.criteria.size = size;
        self.recompose()
    }

    pub fn set_max_price(&mut self, max_price: u32) -> QueryTicket {
        self.criteria.max_price = max_price;
        self.recompose()
    }

    /// Change the owner-type segment (switching between feed tabs)
    pub fn set_segment(&mut self, segment: Option<OwnerType>) -> QueryTicket {
        self.segment = segment;
        self.recompose()
    }

    /// Replace all filter inputs at once
    pub fn replace_criteria(&mut self, criteria: FilterCriteria) -> QueryTicket {
        self.criteria = criteria;
        self.recompose()
    }

    fn recompose(&mut self) -> QueryTicket {
        self.generation += 1;
        self.in_flight = FeedQuery::from_criteria(&self.criteria);
        self.state = QueryState::Pending;

        tracing::debug!(
            generation = self.generation,
            query = ?self.in_flight,
            "feed inputs changed"
        );
        self.current_ticket()
    }

    /// Apply a query outcome if it belongs to the latest input snapshot
    ///
    /// Returns `false` when the ticket was superseded and the outcome was
    /// dropped.
    pub fn resolve(
        &mut self,
        ticket: &QueryTicket,
        result: Result<Vec<CatalogItem>, CatalogError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded feed result"
            );
            return false;
        }

        self.state = match result {
            Ok(items) => QueryState::Ready(segment_items(items, self.segment)),
            Err(e) => {
                tracing::warn!(error = %e, "feed query failed");
                QueryState::Failed(e)
            }
        };
        true
    }

    /// Run the pending query synchronously and apply it
    pub fn refresh<S: CatalogSource + ?Sized>(&mut self, source: &S) -> FeedSnapshot<'_> {
        let ticket = self.current_ticket();
        let result = ticket.query.execute(source);
        self.resolve(&ticket, result);
        self.snapshot()
    }

    /// Current `(items, is_loading)` view for rendering
    #[must_use]
    pub fn snapshot(&self) -> FeedSnapshot<'_> {
        match &self.state {
            QueryState::Pending => FeedSnapshot {
                items: None,
                is_loading: true,
                error: None,
            },
            QueryState::Ready(items) => FeedSnapshot {
                items: Some(items),
                is_loading: false,
                error: None,
            },
            QueryState::Failed(e) => FeedSnapshot {
                items: None,
                is_loading: false,
                error: Some(e),
            },
        }
    }
}

impl Default for FeedSession {
    fn default() -> Self {
        Self::new(FilterCriteria::default(), None)
    }
}
