//! Offline catalog of learning resources, split into foundational and advanced tiers.

use serde::{Deserialize, Serialize};

/// Interview score (percent) at or above which the advanced tier is recommended.
pub const ADVANCED_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Foundational,
    Advanced,
}

impl Tier {
    /// Without a score the general (foundational) plan is shown.
    pub fn for_score(score_percent: Option<f64>) -> Self {
        match score_percent {
            Some(score) if score >= ADVANCED_THRESHOLD => Tier::Advanced,
            _ => Tier::Foundational,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourcePlan {
    pub summary: &'static str,
    /// 8-week roadmap, one entry per two weeks.
    pub plan: &'static [&'static str],
    pub courses: &'static [Course],
    pub websites: &'static [Link],
    pub youtube: &'static [Link],
}

pub struct RoleResources {
    pub role: &'static str,
    pub foundational: ResourcePlan,
    pub advanced: ResourcePlan,
}

impl RoleResources {
    pub fn tier(&self, tier: Tier) -> &ResourcePlan {
        match tier {
            Tier::Foundational => &self.foundational,
            Tier::Advanced => &self.advanced,
        }
    }
}

pub fn find_resources(role: &str) -> Option<&'static RoleResources> {
    let role = role.trim();
    RESOURCES.iter().find(|r| r.role.eq_ignore_ascii_case(role))
}

static RESOURCES: &[RoleResources] = &[
    RoleResources {
        role: "AI Engineer",
        foundational: ResourcePlan {
            summary: "Your score indicates a good opportunity to strengthen your core fundamentals. \
                This plan focuses on building a rock-solid base in machine learning theory and \
                practical Python skills before diving into advanced topics.",
            plan: &[
                "Week 1-2: Python & Data Science Libraries. Master NumPy, Pandas, and Matplotlib.",
                "Week 3-4: Core Machine Learning Concepts. Deeply understand supervised vs. unsupervised learning, regression, classification, and model evaluation metrics.",
                "Week 5-6: Introduction to Deep Learning. Learn the basics of neural networks, activation functions, and backpropagation.",
                "Week 7-8: MLOps Fundamentals. Understand the basics of deploying and monitoring models.",
            ],
            courses: &[
                Course {
                    title: "Machine Learning Specialization",
                    provider: "Coursera (Andrew Ng)",
                    url: "https://www.coursera.org/specializations/machine-learning-introduction",
                },
                Course {
                    title: "Python for Data Science and Machine Learning Bootcamp",
                    provider: "Udemy",
                    url: "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
                },
                Course {
                    title: "Deep Learning Fundamentals",
                    provider: "Cognitive Class.ai",
                    url: "https://cognitiveclass.ai/courses/deep-learning-fundamentals",
                },
            ],
            websites: &[
                Link { name: "Kaggle Learn Courses", url: "https://www.kaggle.com/learn" },
                Link { name: "Towards Data Science", url: "https://towardsdatascience.com/" },
                Link { name: "Machine Learning Mastery", url: "https://machinelearningmastery.com/" },
            ],
            youtube: &[
                Link { name: "StatQuest with Josh Starmer", url: "https://www.youtube.com/c/statquest" },
                Link {
                    name: "3Blue1Brown (Neural Networks Series)",
                    url: "https://www.youtube.com/playlist?list=PLZHQObOWTQDNU6R1_5LHyA2GvwaLR6wP_",
                },
                Link { name: "Krish Naik", url: "https://www.youtube.com/user/krishnaik06" },
            ],
        },
        advanced: ResourcePlan {
            summary: "You have a strong foundation! This plan is designed to push you into more \
                specialized, high-demand areas of AI Engineering, focusing on production-level \
                skills and cutting-edge topics.",
            plan: &[
                "Week 1-2: Advanced Deep Learning Architectures. Explore Transformers, GANs, and Attention mechanisms.",
                "Week 3-4: MLOps in Practice. Implement a full CI/CD pipeline for a machine learning model using Docker, Kubernetes, and a tool like Kubeflow or MLflow.",
                "Week 5-6: Large Language Models (LLMs). Fine-tune a pre-trained LLM (e.g., GPT-2, T5) on a custom dataset.",
                "Week 7-8: Scalable Data Processing. Work with distributed computing frameworks like Spark or Dask for large-scale feature engineering.",
            ],
            courses: &[
                Course {
                    title: "DeepLearning.AI TensorFlow Developer Professional Certificate",
                    provider: "Coursera",
                    url: "https://www.coursera.org/professional-certificates/tensorflow-in-practice",
                },
                Course {
                    title: "Full Stack Machine Learning",
                    provider: "The Full Stack",
                    url: "https://fullstackdeeplearning.com/course/2022/",
                },
                Course {
                    title: "Machine Learning Engineering for Production (MLOps) Specialization",
                    provider: "Coursera",
                    url: "https://www.coursera.org/specializations/machine-learning-engineering-for-production-mlops",
                },
            ],
            websites: &[
                Link { name: "Papers with Code", url: "https://paperswithcode.com/" },
                Link { name: "Hugging Face (Models & Courses)", url: "https://huggingface.co/" },
                Link { name: "Distill.pub", url: "https://distill.pub/" },
            ],
            youtube: &[
                Link { name: "Yannic Kilcher", url: "https://www.youtube.com/c/YannicKilcher" },
                Link { name: "Abhishek Thakur", url: "https://www.youtube.com/c/AbhishekThakurAbhi" },
                Link { name: "Lex Fridman", url: "https://www.youtube.com/c/lexfridman" },
            ],
        },
    },
    RoleResources {
        role: "Data Scientist",
        foundational: ResourcePlan {
            summary: "Your score suggests focusing on the statistics and programming fundamentals \
                every data scientist relies on before moving on to modelling at scale.",
            plan: &[
                "Week 1-2: Python, Pandas and SQL. Load, clean and join real datasets; write analytical SQL queries.",
                "Week 3-4: Statistics & Probability. Distributions, hypothesis testing, confidence intervals and p-values.",
                "Week 5-6: Supervised Learning. Regression and classification with scikit-learn, cross-validation and metrics.",
                "Week 7-8: Data Visualization & Storytelling. Build a portfolio notebook that explains one end-to-end analysis.",
            ],
            courses: &[
                Course {
                    title: "Statistics with Python Specialization",
                    provider: "Coursera (University of Michigan)",
                    url: "https://www.coursera.org/specializations/statistics-with-python",
                },
                Course {
                    title: "Intro to Machine Learning",
                    provider: "Kaggle Learn",
                    url: "https://www.kaggle.com/learn/intro-to-machine-learning",
                },
                Course {
                    title: "SQL for Data Science",
                    provider: "Coursera (UC Davis)",
                    url: "https://www.coursera.org/learn/sql-for-data-science",
                },
            ],
            websites: &[
                Link { name: "Kaggle", url: "https://www.kaggle.com/" },
                Link { name: "Towards Data Science", url: "https://towardsdatascience.com/" },
                Link { name: "scikit-learn User Guide", url: "https://scikit-learn.org/stable/user_guide.html" },
            ],
            youtube: &[
                Link { name: "StatQuest with Josh Starmer", url: "https://www.youtube.com/c/statquest" },
                Link { name: "Corey Schafer", url: "https://www.youtube.com/c/Coreyms" },
                Link { name: "Ken Jee", url: "https://www.youtube.com/c/KenJee1" },
            ],
        },
        advanced: ResourcePlan {
            summary: "You already handle the core toolkit well. This plan moves you toward the \
                experimentation, interpretability and production skills expected of senior \
                data scientists.",
            plan: &[
                "Week 1-2: Feature Engineering & Interpretability. Gradient boosting, SHAP values and model diagnostics.",
                "Week 3-4: Experiment Design & Causal Inference. A/B test design, power analysis and observational methods.",
                "Week 5-6: Time Series & Forecasting. Seasonality, backtesting and probabilistic forecasts.",
                "Week 7-8: Shipping Models. Package a model with MLflow and Docker and monitor it after deployment.",
            ],
            courses: &[
                Course {
                    title: "Practical Deep Learning for Coders",
                    provider: "fast.ai",
                    url: "https://course.fast.ai/",
                },
                Course {
                    title: "Causal Inference for the Brave and True",
                    provider: "Matheus Facure (online book)",
                    url: "https://matheusfacure.github.io/python-causality-handbook/",
                },
                Course {
                    title: "Machine Learning Engineering for Production (MLOps) Specialization",
                    provider: "Coursera",
                    url: "https://www.coursera.org/specializations/machine-learning-engineering-for-production-mlops",
                },
            ],
            websites: &[
                Link { name: "Papers with Code", url: "https://paperswithcode.com/" },
                Link { name: "Distill.pub", url: "https://distill.pub/" },
                Link { name: "Hugging Face (Models & Courses)", url: "https://huggingface.co/" },
            ],
            youtube: &[
                Link { name: "Data School", url: "https://www.youtube.com/c/dataschool" },
                Link { name: "Abhishek Thakur", url: "https://www.youtube.com/c/AbhishekThakurAbhi" },
                Link { name: "Yannic Kilcher", url: "https://www.youtube.com/c/YannicKilcher" },
            ],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_threshold() {
        assert_eq!(Tier::for_score(None), Tier::Foundational);
        assert_eq!(Tier::for_score(Some(69.9)), Tier::Foundational);
        assert_eq!(Tier::for_score(Some(70.0)), Tier::Advanced);
        assert_eq!(Tier::for_score(Some(100.0)), Tier::Advanced);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let resources = find_resources(" ai engineer ").unwrap();
        assert_eq!(resources.role, "AI Engineer");
        assert!(find_resources("Game Developer").is_none());
    }

    #[test]
    fn test_every_tier_is_complete() {
        for resources in RESOURCES {
            let role = resources.role;
            for tier in [Tier::Foundational, Tier::Advanced] {
                let plan = resources.tier(tier);
                assert_eq!(plan.plan.len(), 4, "{role} {tier:?}");
                assert!(!plan.courses.is_empty());
                assert!(!plan.websites.is_empty());
                assert!(!plan.youtube.is_empty());
                assert!(plan.courses.iter().all(|c| c.url.starts_with("https://")));
            }
        }
    }
}
