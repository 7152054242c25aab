//! The two-stage request pipeline: resolve components by convention, run the
//! controller, feed its outcome to the handler, then either return the
//! handler's reply or persist through its success/error continuations.

use tracing::{debug, error, warn};

use crate::component::ComponentRegistry;
use crate::controller::Outcome;
use crate::convention::{controller_name, handler_name, Action};
use crate::error::{AppError, Failure};
use crate::handler::{Continuation, HandlerContext, HandlerOutput};
use crate::request::ResourceRequest;
use crate::response::Reply;

const CALLBACKS_REQUIRED: &str = "Success and Error blocks are required for create, update, and delete actions";

/// Runs one request. `Err` carries anything the pipeline does not recover
/// from itself; the caller renders it at the error boundary.
pub async fn run(components: &ComponentRegistry, request: &ResourceRequest) -> Result<Reply, Failure> {
    let controller_name = controller_name(&request.resource, &request.action);
    let handler_name = handler_name(&request.resource, &request.action);

    let (Some(controller), Some(handler)) = (
        components.controller(&controller_name),
        components.handler(&handler_name),
    ) else {
        warn!(controller = %controller_name, handler = %handler_name, "no components registered for route");
        return Ok(Reply::resource_not_found(&request.resource));
    };
    debug!(controller = %controller_name, handler = %handler_name, "resolved components");

    let fail = |error: AppError| Failure::new(error, controller_name.as_str(), handler_name.as_str());

    let outcome = controller.execute(request).await.map_err(fail)?;
    if let Outcome::Halt(reply) = outcome {
        debug!(status = %reply.status, "controller halted");
        return Ok(reply);
    }
    if outcome.is_empty() {
        return Ok(Reply::resource_not_found(&request.resource));
    }
    debug!(outcome = outcome.kind(), "controller finished");

    let output = handler
        .handle(HandlerContext {
            request,
            outcome: &outcome,
        })
        .await
        .map_err(fail)?;

    match output {
        HandlerOutput::Reply(reply) if request.action.is_read() => Ok(reply),
        HandlerOutput::Persist(_) if request.action.is_read() => Err(fail(AppError::HandlerContract(format!(
            "{} must return a reply for {} actions",
            handler_name, request.action
        )))),
        HandlerOutput::Reply(_) => Err(fail(AppError::HandlerContract(CALLBACKS_REQUIRED.into()))),
        HandlerOutput::Persist(responders) => {
            let (success, failure) = responders
                .into_pair()
                .ok_or_else(|| fail(AppError::HandlerContract(CALLBACKS_REQUIRED.into())))?;
            persist(&request.action, outcome, success, failure).await.map_err(fail)
        }
    }
}

/// Saves (or deletes) the controller's record and picks a continuation.
/// Validation failures go to the error continuation; any other persistence
/// error becomes a 500 without running either.
async fn persist(
    action: &Action,
    outcome: Outcome,
    success: Continuation,
    failure: Continuation,
) -> Result<Reply, AppError> {
    let mut record = match outcome {
        Outcome::Record(record) => record,
        other => {
            return Err(AppError::HandlerContract(format!(
                "{} actions need a single record from the controller, got {}",
                action,
                other.kind()
            )))
        }
    };

    let attempt = if *action == Action::Delete {
        record.delete().await
    } else {
        record.save().await
    };

    match attempt {
        Ok(true) => Ok(success(record.as_ref())),
        Ok(false) => Ok(failure(record.as_ref())),
        Err(AppError::Validation(errors)) => {
            record.errors_mut().merge(errors);
            Ok(failure(record.as_ref()))
        }
        Err(e) => {
            error!(error = %e, action = %action, "persistence failed");
            Ok(Reply::server_error(e.to_string()))
        }
    }
}
