use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crewplan_prompts::AgentAction;

use super::{ModelError, ModelRequest, ModelService};

/// A model that replays queued outcomes per action, for tests and offline
/// replays of recorded conversations.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    script: Mutex<HashMap<AgentAction, VecDeque<Result<String, ModelError>>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next `action` request.
    pub fn reply(self, action: AgentAction, text: &str) -> Self {
        self.push(action, Ok(text.to_string()))
    }

    /// Queue a failure for the next `action` request.
    pub fn fail(self, action: AgentAction, error: ModelError) -> Self {
        self.push(action, Err(error))
    }

    /// Build from recorded replies, e.g. a deserialized replay file.
    pub fn from_replies(replies: HashMap<AgentAction, Vec<String>>) -> Self {
        replies
            .into_iter()
            .fold(Self::new(), |model, (action, texts)| {
                texts
                    .iter()
                    .fold(model, |model, text| model.reply(action, text))
            })
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn calls(&self, action: AgentAction) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.action == action)
            .count()
    }

    fn push(self, action: AgentAction, outcome: Result<String, ModelError>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.entry(action).or_default().push_back(outcome);
        }
        self
    }
}

impl ModelService for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    fn complete(&self, request: &ModelRequest) -> Result<String, ModelError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let mut script = self
            .script
            .lock()
            .map_err(|_| ModelError::Fatal("script lock poisoned".into()))?;
        script
            .get_mut(&request.action)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(ModelError::Fatal(format!(
                    "no scripted reply left for {}",
                    request.action
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewplan_prompts::AgentProfile;

    fn request(action: AgentAction) -> ModelRequest {
        ModelRequest::build(&AgentProfile::task_processor(), action, "task")
    }

    #[test]
    fn replays_in_order_per_action() {
        let model = ScriptedModel::new()
            .reply(AgentAction::Evaluate, "YES: one")
            .reply(AgentAction::Estimate, "{}")
            .reply(AgentAction::Evaluate, "NO: two");

        assert_eq!(model.complete(&request(AgentAction::Evaluate)).unwrap(), "YES: one");
        assert_eq!(model.complete(&request(AgentAction::Evaluate)).unwrap(), "NO: two");
        assert_eq!(model.complete(&request(AgentAction::Estimate)).unwrap(), "{}");
        assert_eq!(model.calls(AgentAction::Evaluate), 2);
        assert_eq!(model.requests().len(), 3);
    }

    #[test]
    fn queued_failures_are_returned() {
        let model = ScriptedModel::new()
            .fail(AgentAction::Analyze, ModelError::Transient("429".into()))
            .reply(AgentAction::Analyze, "ok");
        assert_eq!(
            model.complete(&request(AgentAction::Analyze)),
            Err(ModelError::Transient("429".into()))
        );
        assert_eq!(model.complete(&request(AgentAction::Analyze)).unwrap(), "ok");
    }

    #[test]
    fn empty_script_is_fatal() {
        let model = ScriptedModel::new();
        let err = model.complete(&request(AgentAction::Estimate)).unwrap_err();
        assert!(!err.is_transient());
        assert_eq!(err.to_string(), "model failure: no scripted reply left for estimate");
    }

    #[test]
    fn from_replies_queues_everything() {
        let mut replies = HashMap::new();
        replies.insert(
            AgentAction::Evaluate,
            vec!["YES: a".to_string(), "NO: b".to_string()],
        );
        let model = ScriptedModel::from_replies(replies);
        assert_eq!(model.complete(&request(AgentAction::Evaluate)).unwrap(), "YES: a");
        assert_eq!(model.complete(&request(AgentAction::Evaluate)).unwrap(), "NO: b");
        assert!(model.complete(&request(AgentAction::Evaluate)).is_err());
    }

    #[test]
    fn name_is_scripted() {
        let model = ScriptedModel::new();
        assert_eq!(model.name(), "scripted");
        assert_eq!(model.model_hint(), None);
    }
}
