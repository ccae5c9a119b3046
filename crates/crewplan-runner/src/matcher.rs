//! Task-to-employee matching by TF-IDF cosine similarity.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crewplan_core::{CrewplanError, Employee};
use tracing::info;

/// An employee with its similarity to a task, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEmployee {
    /// Position of the employee in the list that was scored
    pub index: usize,
    pub employee: Employee,
    pub score: f64,
}

/// Common English words that should not influence scoring
fn stopwords() -> &'static HashSet<&'static str> {
    static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOPWORDS.get_or_init(|| {
        [
            "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "are",
            "as", "at", "be", "been", "before", "being", "between", "both", "but", "by", "can",
            "could", "did", "do", "does", "doing", "during", "each", "few", "for", "from",
            "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
            "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
            "more", "most", "my", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
            "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so",
            "some", "such", "than", "that", "the", "their", "them", "then", "there", "these",
            "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
            "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
            "why", "will", "with", "would", "you", "your", "yours",
        ]
        .into_iter()
        .collect()
    })
}

/// Lowercase alphanumeric words of two or more characters, minus stop words.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|w| !stopwords().contains(w.as_str()))
        .collect()
}

/// Smoothed TF-IDF vectors, L2-normalized, one per document.
fn tfidf_vectors(documents: &[Vec<String>]) -> Vec<HashMap<String, f64>> {
    let n = documents.len() as f64;
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    documents
        .iter()
        .map(|doc| {
            let mut vector: HashMap<String, f64> = HashMap::new();
            for term in doc {
                *vector.entry(term.clone()).or_insert(0.0) += 1.0;
            }
            for (term, weight) in vector.iter_mut() {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
                *weight *= ((1.0 + n) / (1.0 + df)).ln() + 1.0;
            }
            let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for weight in vector.values_mut() {
                    *weight /= norm;
                }
            }
            vector
        })
        .collect()
}

fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    a.iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum()
}

/// Score every employee against `task`, highest first. Ties keep input
/// order. Employees with no skills and no `my_work` all score 0.
pub fn similarity_scores(
    task: &str,
    employees: &[Employee],
) -> Result<Vec<ScoredEmployee>, CrewplanError> {
    if task.trim().is_empty() {
        return Err(CrewplanError::InvalidInput(
            "task description cannot be empty".into(),
        ));
    }
    if employees.is_empty() {
        return Err(CrewplanError::InvalidInput(
            "employees must be a non-empty list".into(),
        ));
    }

    let mut documents = vec![tokenize(task)];
    documents.extend(employees.iter().map(|e| tokenize(&e.expertise())));

    let vectors = tfidf_vectors(&documents);
    let task_vector = &vectors[0];

    let mut scored: Vec<ScoredEmployee> = employees
        .iter()
        .zip(&vectors[1..])
        .enumerate()
        .map(|(index, (employee, vector))| ScoredEmployee {
            index,
            employee: employee.clone(),
            score: cosine(task_vector, vector),
        })
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    info!(
        "computed similarity scores for task '{task}' across {} employees",
        employees.len()
    );
    Ok(scored)
}

/// The employee best suited to `task`, if any employee is given.
pub fn find_best_match(task: &str, employees: &[Employee]) -> Option<ScoredEmployee> {
    let best = similarity_scores(task, employees).ok()?.into_iter().next()?;
    info!(
        "best match for '{task}': {} with score {:.2}",
        best.employee.name, best.score
    );
    Some(best)
}
