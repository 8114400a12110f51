use std::collections::VecDeque;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use rackdesk::api::{
    AdminClient, LoginSession, RackSlot, RackSlotDraft, RepairOrder, SupportTicket, User, UserDraft,
    UserPage,
};
use rackdesk::logic::pages::PageKind;

/// Upper bound on requests running at once
const MAX_CONCURRENT: usize = 8;

/// A write the user asked for; echoed back so the result can be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    StatusChanged,
    EngineerAssigned,
    Created,
    Updated,
    Deleted,
}

impl Mutation {
    pub fn past_tense(&self) -> &'static str {
        match self {
            Mutation::StatusChanged => "status updated",
            Mutation::EngineerAssigned => "engineer assigned",
            Mutation::Created => "created",
            Mutation::Updated => "updated",
            Mutation::Deleted => "deleted",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Mutation::StatusChanged => "update status",
            Mutation::EngineerAssigned => "assign engineer",
            Mutation::Created => "create",
            Mutation::Updated => "update",
            Mutation::Deleted => "delete",
        }
    }
}

/// A freshly fetched record for the detail modal
#[derive(Debug, Clone)]
pub enum DetailRecord {
    User(User),
    Repair(RepairOrder),
    Ticket(SupportTicket),
}

/// API request types
#[derive(Debug, Clone)]
pub enum ApiRequest {
    Login { email: String, password: String },

    FetchUsers { page: u32, limit: u32, role: Option<String> },
    FetchRepairs,
    FetchRacks,
    FetchTickets,

    FetchDetail { kind: PageKind, id: String },

    UpdateStatus { kind: PageKind, id: String, status: String },
    AssignEngineer { id: String, engineer: String },

    CreateUser(UserDraft),
    UpdateUser { id: String, draft: UserDraft },
    DeleteUser { id: String },

    CreateRackSlot(RackSlotDraft),
    DeleteRackSlot { id: String },
}

impl ApiRequest {
    fn label(&self) -> &'static str {
        match self {
            ApiRequest::Login { .. } => "login",
            ApiRequest::FetchUsers { .. } => "fetch users",
            ApiRequest::FetchRepairs => "fetch repairs",
            ApiRequest::FetchRacks => "fetch racks",
            ApiRequest::FetchTickets => "fetch tickets",
            ApiRequest::FetchDetail { .. } => "fetch detail",
            ApiRequest::UpdateStatus { .. } => "update status",
            ApiRequest::AssignEngineer { .. } => "assign engineer",
            ApiRequest::CreateUser(_) => "create user",
            ApiRequest::UpdateUser { .. } => "update user",
            ApiRequest::DeleteUser { .. } => "delete user",
            ApiRequest::CreateRackSlot(_) => "create rack slot",
            ApiRequest::DeleteRackSlot { .. } => "delete rack slot",
        }
    }
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    LoginResult {
        result: Result<LoginSession, anyhow::Error>,
    },

    UsersResult {
        page: u32,
        result: Result<UserPage, anyhow::Error>,
    },

    RepairsResult {
        result: Result<Vec<RepairOrder>, anyhow::Error>,
    },

    RacksResult {
        result: Result<Vec<RackSlot>, anyhow::Error>,
    },

    TicketsResult {
        result: Result<Vec<SupportTicket>, anyhow::Error>,
    },

    DetailResult {
        kind: PageKind,
        id: String,
        result: Result<DetailRecord, anyhow::Error>,
    },

    MutationResult {
        kind: PageKind,
        mutation: Mutation,
        result: Result<(), anyhow::Error>,
    },
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed,
}

/// API service worker that processes requests in the background
///
/// Requests run in arrival order. Nothing is cancelled, retried or
/// debounced; a response for a page the user has left is still applied.
pub struct ApiService {
    client: AdminClient,
    request_queue: VecDeque<ApiRequest>,
    in_flight: usize,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
}

impl ApiService {
    pub fn new(
        client: AdminClient,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: 0,
            response_tx,
            completion_tx,
            max_concurrent: MAX_CONCURRENT,
        }
    }

    fn enqueue(&mut self, request: ApiRequest) {
        tracing::debug!(request = request.label(), queued = self.request_queue.len(), "enqueue");
        self.request_queue.push_back(request);
    }

    /// Start the next queued request if below the concurrency cap
    fn process_next(&mut self) {
        if self.in_flight >= self.max_concurrent {
            return;
        }

        let Some(request) = self.request_queue.pop_front() else {
            return;
        };

        self.in_flight += 1;

        let client = self.client.clone();
        let response_tx = self.response_tx.clone();
        let completion_tx = self.completion_tx.clone();

        tokio::spawn(async move {
            let label = request.label();
            let response = Self::execute_request(&client, request).await;
            tracing::debug!(request = label, "request finished");

            let _ = response_tx.send(response);
            let _ = completion_tx.send(InternalMessage::Completed);
        });
    }

    async fn execute_request(client: &AdminClient, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::Login { email, password } => ApiResponse::LoginResult {
                result: client.login(&email, &password).await,
            },

            ApiRequest::FetchUsers { page, limit, role } => ApiResponse::UsersResult {
                page,
                result: client.list_users(page, limit, role.as_deref()).await,
            },

            ApiRequest::FetchRepairs => ApiResponse::RepairsResult {
                result: client.list_repair_orders().await,
            },

            ApiRequest::FetchRacks => ApiResponse::RacksResult {
                result: client.list_rack_slots().await,
            },

            ApiRequest::FetchTickets => ApiResponse::TicketsResult {
                result: client.list_support_tickets().await,
            },

            ApiRequest::FetchDetail { kind, id } => {
                let result = match kind {
                    PageKind::Users => client.get_user(&id).await.map(DetailRecord::User),
                    PageKind::Repairs => client.get_repair_order(&id).await.map(DetailRecord::Repair),
                    PageKind::Tickets => client.get_support_ticket(&id).await.map(DetailRecord::Ticket),
                    PageKind::Racks => Err(anyhow::anyhow!("Rack slots have no detail endpoint")),
                };
                ApiResponse::DetailResult { kind, id, result }
            }

            ApiRequest::UpdateStatus { kind, id, status } => {
                let changes = serde_json::json!({ "status": status });
                let result = match kind {
                    PageKind::Repairs => client.update_repair_order(&id, changes).await,
                    PageKind::Tickets => client.update_support_ticket(&id, changes).await,
                    PageKind::Users | PageKind::Racks => {
                        Err(anyhow::anyhow!("Status updates are not supported for {}", kind.noun()))
                    }
                };
                ApiResponse::MutationResult {
                    kind,
                    mutation: Mutation::StatusChanged,
                    result,
                }
            }

            ApiRequest::AssignEngineer { id, engineer } => {
                let changes = serde_json::json!({ "engineer": engineer });
                ApiResponse::MutationResult {
                    kind: PageKind::Repairs,
                    mutation: Mutation::EngineerAssigned,
                    result: client.update_repair_order(&id, changes).await,
                }
            }

            ApiRequest::CreateUser(draft) => ApiResponse::MutationResult {
                kind: PageKind::Users,
                mutation: Mutation::Created,
                result: client.create_user(&draft).await,
            },

            ApiRequest::UpdateUser { id, draft } => ApiResponse::MutationResult {
                kind: PageKind::Users,
                mutation: Mutation::Updated,
                result: client.update_user(&id, &draft).await,
            },

            ApiRequest::DeleteUser { id } => ApiResponse::MutationResult {
                kind: PageKind::Users,
                mutation: Mutation::Deleted,
                result: client.delete_user(&id).await,
            },

            ApiRequest::CreateRackSlot(draft) => ApiResponse::MutationResult {
                kind: PageKind::Racks,
                mutation: Mutation::Created,
                result: client.create_rack_slot(&draft).await,
            },

            ApiRequest::DeleteRackSlot { id } => ApiResponse::MutationResult {
                kind: PageKind::Racks,
                mutation: Mutation::Deleted,
                result: client.delete_rack_slot(&id).await,
            },
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: AdminClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        // Ticker for processing queue
        let mut tick = interval(Duration::from_millis(10));

        loop {
            tokio::select! {
                request = request_rx.recv() => match request {
                    Some(request) => service.enqueue(request),
                    None => break,
                },

                Some(InternalMessage::Completed) = completion_rx.recv() => {
                    service.in_flight = service.in_flight.saturating_sub(1);
                }

                _ = tick.tick() => {
                    while !service.request_queue.is_empty() && service.in_flight < service.max_concurrent {
                        service.process_next();
                    }
                }
            }
        }

        tracing::debug!("request channel closed; API worker exiting");
    });

    (request_tx, response_rx)
}
