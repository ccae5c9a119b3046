//! Agent drivers: build a prompt, call the model through the retry
//! executor, interpret the reply.

pub mod analyst;
pub mod employee;
pub mod task;

use std::sync::Arc;

use crewplan_prompts::{AgentAction, AgentProfile};

use crate::estimator::truncate;
use crate::logger::{Logger, TracingLogger};
use crate::model::{ModelError, ModelRequest, ModelService};
use crate::retry::{retry_if, RetryError, RetryPolicy, Sleeper, ThreadSleeper};

/// Shared collaborators for all agents: the model, the retry policy and
/// the logging and sleeping capabilities.
#[derive(Clone)]
pub struct Crew {
    service: Arc<dyn ModelService>,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
    logger: Arc<dyn Logger>,
}

impl Crew {
    pub fn new(service: Arc<dyn ModelService>) -> Self {
        Self {
            service,
            policy: RetryPolicy::default(),
            sleeper: Arc::new(ThreadSleeper),
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub fn sleeper(&self) -> &dyn Sleeper {
        self.sleeper.as_ref()
    }

    /// Send one request, retrying transient failures. Returns the trimmed
    /// reply text.
    pub fn ask(
        &self,
        profile: &AgentProfile,
        action: AgentAction,
        input: &str,
    ) -> Result<String, RetryError<ModelError>> {
        let request = ModelRequest::build(profile, action, input);
        self.log_action(profile, action.as_str(), Some(input));

        let reply = retry_if(
            &self.policy,
            self.sleeper.as_ref(),
            self.logger.as_ref(),
            ModelError::is_transient,
            || self.service.complete(&request),
        )?;

        let reply = reply.trim().to_string();
        self.log_action(profile, "reply", Some(truncate(&reply, 200)));
        Ok(reply)
    }

    /// Verbose profiles log at debug level, others at info.
    fn log_action(&self, profile: &AgentProfile, action: &str, details: Option<&str>) {
        let service = match self.service.model_hint() {
            Some(model) => format!("{}/{model}", self.service.name()),
            None => self.service.name().to_string(),
        };
        let mut message = format!("agent '{}' ({service}) performed {action}", profile.role);
        if let Some(details) = details {
            message.push_str(": ");
            message.push_str(details);
        }
        if profile.verbose {
            self.logger.debug(&message);
        } else {
            self.logger.info(&message);
        }
    }
}
