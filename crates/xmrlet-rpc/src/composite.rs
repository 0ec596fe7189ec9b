//! Multi-step wallet operations.
//!
//! A [`Plan`] is an ordered list of calls where each step's params are
//! computed from the previous step's typed response (and, if needed, from
//! every response so far). Plans fail fast: the first failing step ends the
//! run and nothing is rolled back.

use std::marker::PhantomData;

use serde_json::Value;
use tracing::{debug, error};

use crate::dispatcher::Dispatcher;
use crate::registry::{Method, Payload, WalletMethod};
use crate::result::{CallError, DecodeError};
use crate::transport::Transport;

/// Responses of the steps that have completed, in order. While a step's
/// params are derived, the previous step's response is the last entry.
#[derive(Debug, Default, Clone)]
pub struct History {
    payloads: Vec<Payload>,
}

impl History {
    /// The most recent response of method `M`, if a step called it.
    pub fn get<M: WalletMethod>(&self) -> Option<&M::Response> {
        self.payloads.iter().rev().find_map(M::from_payload)
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    pub fn payloads(&self) -> &[Payload] {
        &self.payloads
    }
}

/// A step of a plan failed.
#[derive(Debug, thiserror::Error)]
#[error("step {index} ({method}) failed: {error}")]
pub struct StepFailure {
    /// Zero-based position of the failing step.
    pub index: usize,
    pub method: Method,
    /// The failing call's error, unchanged.
    #[source]
    pub error: CallError,
}

type DeriveParams = Box<dyn Fn(&History) -> Result<Value, CallError> + Send + Sync>;

struct Step {
    method: Method,
    derive: DeriveParams,
}

/// A typed chain of calls starting with `First` and ending with `Last`.
pub struct Plan<First: WalletMethod, Last: WalletMethod> {
    steps: Vec<Step>,
    _marker: PhantomData<fn() -> (First, Last)>,
}

impl<M: WalletMethod> Plan<M, M> {
    /// A plan whose first step calls `M` with the params given to [`Plan::run`].
    pub fn start() -> Self {
        Self {
            steps: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<First: WalletMethod, Last: WalletMethod> Plan<First, Last> {
    /// Append a step whose params come from the previous step's response.
    pub fn then<N, F>(self, derive: F) -> Plan<First, N>
    where
        N: WalletMethod,
        F: Fn(&Last::Response) -> N::Params + Send + Sync + 'static,
    {
        self.then_with_history::<N, _>(move |prev, _| derive(prev))
    }

    /// Append a step whose params may also use any earlier response.
    ///
    /// `history` includes the previous step's response, so
    /// `history.get::<Last>()` returns the same value as the first argument.
    pub fn then_with_history<N, F>(mut self, derive: F) -> Plan<First, N>
    where
        N: WalletMethod,
        F: Fn(&Last::Response, &History) -> N::Params + Send + Sync + 'static,
    {
        let derive: DeriveParams = Box::new(move |history: &History| {
            let prev = history.payloads.last();
            let prev = prev.and_then(Last::from_payload).ok_or_else(|| {
                CallError::Decode(DecodeError {
                    method: Last::METHOD.as_str().to_string(),
                    expected: Last::METHOD.descriptor().result_shape,
                    actual: prev
                        .map(|p| p.method().descriptor().result_shape)
                        .unwrap_or("nothing")
                        .to_string(),
                    detail: "previous step returned another method's payload".to_string(),
                })
            })?;
            serde_json::to_value(derive(prev, history)).map_err(CallError::Encode)
        });
        self.steps.push(Step {
            method: N::METHOD,
            derive,
        });
        Plan {
            steps: self.steps,
            _marker: PhantomData,
        }
    }

    /// Methods called, in order.
    pub fn methods(&self) -> Vec<Method> {
        std::iter::once(First::METHOD)
            .chain(self.steps.iter().map(|s| s.method))
            .collect()
    }

    /// Run every step in order against `dispatcher`.
    pub async fn run<T: Transport>(
        &self,
        dispatcher: &Dispatcher<T>,
        initial: &First::Params,
    ) -> Result<Last::Response, StepFailure> {
        let mut history = History::default();

        let params = serde_json::to_value(initial)
            .map_err(|e| fail(0, First::METHOD, CallError::Encode(e)))?;
        let first = call_step(dispatcher, 0, First::METHOD, params).await?;
        history.payloads.push(first);

        for (i, step) in self.steps.iter().enumerate() {
            let index = i + 1;
            let params = (step.derive)(&history).map_err(|e| fail(index, step.method, e))?;
            let payload = call_step(dispatcher, index, step.method, params).await?;
            history.payloads.push(payload);
        }

        let last = history.payloads.pop();
        let method = last.as_ref().map(Payload::method).unwrap_or(Last::METHOD);
        last.and_then(Last::into_response).ok_or_else(|| {
            fail(
                self.steps.len(),
                Last::METHOD,
                CallError::Decode(DecodeError {
                    method: Last::METHOD.as_str().to_string(),
                    expected: Last::METHOD.descriptor().result_shape,
                    actual: method.descriptor().result_shape.to_string(),
                    detail: "final step returned another method's payload".to_string(),
                }),
            )
        })
    }
}

async fn call_step<T: Transport>(
    dispatcher: &Dispatcher<T>,
    index: usize,
    method: Method,
    params: Value,
) -> Result<Payload, StepFailure> {
    debug!(step = index, method = %method, "running plan step");
    let envelope = dispatcher
        .builder()
        .build_method(method, params)
        .map_err(|e| fail(index, method, e))?;
    dispatcher
        .send(&envelope)
        .await
        .map_err(|e| fail(index, method, e))
}

fn fail(index: usize, method: Method, err: CallError) -> StepFailure {
    match err.as_rpc_error() {
        Some(rpc) => error!(
            step = index,
            method = %method,
            code = rpc.code,
            message = %rpc.message,
            "plan step rejected by wallet"
        ),
        None => error!(step = index, method = %method, error = %err, "plan step failed"),
    }
    StepFailure {
        index,
        method,
        error: err,
    }
}

/// Ready-made plans.
pub mod plans {
    use super::Plan;
    use crate::methods::{SignTransferParams, SubmitTransferParams};
    use crate::registry::{SignTransfer, SubmitTransfer, Transfer};

    /// `transfer`, then `sign_transfer` on its `unsigned_txset`, then
    /// `submit_transfer` on the resulting `signed_txset`.
    ///
    /// This is the cold-signing flow for a view-only wallet: both blobs are
    /// passed through unchanged.
    pub fn transfer_sign_submit() -> Plan<Transfer, SubmitTransfer> {
        Plan::<Transfer, Transfer>::start()
            .then::<SignTransfer, _>(|transfer| {
                SignTransferParams::new(transfer.unsigned_txset.clone())
            })
            .then::<SubmitTransfer, _>(|signed| {
                SubmitTransferParams::new(signed.signed_txset.clone())
            })
    }
}
