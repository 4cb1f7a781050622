//! The interview question bank: fifteen open questions per catalog role.

use serde::{Deserialize, Serialize};

pub const QUESTIONS_PER_ROLE: usize = 15;
/// Roles without their own bank are interviewed with this one.
pub const FALLBACK_ROLE: &str = "Data Scientist";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn question_count(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 15,
        }
    }
}

pub struct QuestionSet {
    pub role: &'static str,
    pub questions: [&'static str; QUESTIONS_PER_ROLE],
}

/// The bank used for `role`, falling back to the Data Scientist bank.
pub fn question_set(role: &str) -> &'static QuestionSet {
    let role = role.trim();
    QUESTION_BANK
        .iter()
        .find(|set| set.role.eq_ignore_ascii_case(role))
        .or_else(|| QUESTION_BANK.iter().find(|set| set.role == FALLBACK_ROLE))
        .unwrap_or(&QUESTION_BANK[0])
}

/// The first `difficulty.question_count()` questions of the role's bank.
pub fn questions_for(role: &str, difficulty: Difficulty) -> (&'static str, Vec<&'static str>) {
    let set = question_set(role);
    let questions = set
        .questions
        .iter()
        .copied()
        .take(difficulty.question_count())
        .collect();
    (set.role, questions)
}

static QUESTION_BANK: &[QuestionSet] = &[
    QuestionSet {
        role: "Data Scientist",
        questions: [
            "Explain the Difference Between Classification and Regression?",
            "What is Bias in Machine Learning?",
            "What is Cross-Validation?",
            "What are Support Vectors in SVM?",
            "Explain SVM Algorithm in Detail",
            "What is PCA? When do you use it?",
            "What is 'Naive' in a Naive Bayes?",
            "What is Unsupervised Learning?",
            "What is Supervised Learning?",
            "What are Different Types of Machine Learning algorithms?",
            "What is F1 score? How would you use it?",
            "Define Precision and Recall?",
            "How to Tackle Overfitting and Underfitting?",
            "What is a Neural Network?",
            "What are Loss Function and Cost Functions? Explain the key Difference Between them?",
        ],
    },
    QuestionSet {
        role: "Backend Developer",
        questions: [
            "What is the difference between ArrayList and LinkedList in Java?",
            "Explain the concept of multithreading in Java.",
            "State difference between GraphQL and REST.",
            "What is CI (Continuous Integration)?",
            "Explain event loop in Node.js.",
            "Is there a way to decrease the load time of a web application?",
            "Explain dependency injection.",
            "State difference between normalization and denormalization.",
            "What is Promise and explain its states?",
            "State the difference between GET and POST.",
            "Explain the Restful API and write its usage.",
            "What do you mean by MEAN Stack?",
            "What makes MVC different from MVP?",
            "Explain inversion of control.",
            "What do you mean by CORS (Cross-Origin Resource Sharing)?",
        ],
    },
    QuestionSet {
        role: "Frontend Developer",
        questions: [
            "What is the difference between margin and padding in CSS?",
            "Explain how flexbox works in CSS.",
            "What is the event loop in JavaScript?",
            "Explain the difference between let, const, and var in JavaScript.",
            "What is a closure in JavaScript?",
            "Explain responsive design and how to implement it.",
            "What is the DOM and how do you manipulate it?",
            "What is the difference between == and === in JavaScript?",
            "Explain event bubbling and capturing in JavaScript.",
            "What is a promise in JavaScript?",
            "How does HTTP work?",
            "What is CORS and how to handle it?",
            "Explain the box model in CSS.",
            "What is a service worker?",
            "How to optimize website performance?",
        ],
    },
    QuestionSet {
        role: "Full Stack Developer",
        questions: [
            "Explain the meaning of multithreading.",
            "Which language is the most preferred by full-stack developers?",
            "Explain Pair Programming.",
            "What do you mean by CORS (Cross-Origin Resource Sharing)?",
            "What is Callback Hell?",
            "Explain Long Polling.",
            "Can you tell me what are the latest trends in Full Stack Development? Also, how do you keep yourself updated about the new trends in the industry?",
            "State difference between GraphQL and REST (Representational State Transfer).",
            "What is CI (Continuous Integration)?",
            "To develop a project from scratch, what technologies and languages would you need or what skills a full stack developer should have?",
            "Explain the benefits and drawbacks of using 'use strict'.",
            "What are some of the uses of Docker?",
            "Explain event loop in Node.js.",
            "Is there a way to decrease the load time of a web application?",
            "Explain dependency injection.",
        ],
    },
    QuestionSet {
        role: "AI Engineer",
        questions: [
            "What are the main types of AI?",
            "How does machine learning differ from traditional programming?",
            "What is a Neural Network?",
            "What are Loss Function and Cost Functions? Explain the key Difference Between them?",
            "What is Ensemble learning?",
            "How do you make sure which Machine Learning Algorithm to use?",
            "How to Handle Outlier Values?",
            "What is a Random Forest? How does it work?",
            "What is Collaborative Filtering? And Content-Based Filtering?",
            "What is Clustering?",
            "How can you select K for K-means Clustering?",
            "What are Recommender Systems?",
            "Can logistic regression use for more than 2 classes?",
            "Explain Correlation and Covariance?",
            "What is P-value?",
        ],
    },
    QuestionSet {
        role: "Machine Learning Engineer",
        questions: [
            "Explain the Difference Between Classification and Regression?",
            "What is Bias in Machine Learning?",
            "What is Cross-Validation?",
            "Explain SVM Algorithm in Detail",
            "What is PCA? When do you use it?",
            "What is Unsupervised Learning?",
            "What is Supervised Learning?",
            "What is F1 score? How would you use it?",
            "Define Precision and Recall?",
            "How to Tackle Overfitting and Underfitting?",
            "What are Loss Function and Cost Functions? Explain the key Difference Between them?",
            "What is Ensemble learning?",
            "How do you make sure which Machine Learning Algorithm to use?",
            "What is a Random Forest? How does it work?",
            "What is Clustering?",
        ],
    },
    QuestionSet {
        role: "DevOps Engineer",
        questions: [
            "What is configuration management?",
            "What is the importance of having configuration management in DevOps?",
            "What is Continuous Integration (CI)?",
            "Why is Continuous Integration needed?",
            "What is Continuous Testing (CT)?",
            "What can be a preparatory approach for developing a project using the DevOps methodology?",
            "How does AWS contribute to DevOps?",
            "How does Ansible work?",
            "Can you say something about the DevOps pipeline?",
            "Can you differentiate between continuous testing and automation testing?",
            "Explain the different phases in DevOps methodology.",
            "How is DevOps different than the Agile Methodology?",
            "Can you explain the \"Shift left to reduce failure\" concept in DevOps?",
            "Can you explain the \"infrastructure as code\" (IaC) concept?",
            "What is Blue/Green Deployment Pattern?",
        ],
    },
    QuestionSet {
        role: "Cloud Architect",
        questions: [
            "What is a Cloud Technology?",
            "Describe the Cloud Computing Architecture.",
            "What are the different versions of the cloud?",
            "What do you mean by cloud delivery models?",
            "What are some of the key features of Cloud Computing?",
            "How does Resource Replication take place in Cloud Computing?",
            "What are some issues with Cloud Computing?",
            "What are Low-Density Data Centers?",
            "What are Containerized Data Centers?",
            "What do you mean by encapsulation in cloud computing?",
            "What is meant by Edge Computing?",
            "What are Cloud-Native Applications?",
            "Why are microservices important for a true cloud environment?",
            "What are Microservices?",
            "What are the advantages and disadvantages of serverless computing?",
        ],
    },
    QuestionSet {
        role: "Cybersecurity Analyst",
        questions: [
            "What do you mean by a Null Session?",
            "Differentiate between threat, vulnerability, and risk.",
            "What does XSS stand for? How can it be prevented?",
            "What is a Firewall?",
            "Define VPN.",
            "Who are Black Hat, White Hat, and Grey Hat Hackers?",
            "What are the types of Cyber Security?",
            "What do you mean by a botnet?",
            "What do you mean by honeypots?",
            "Differentiate between Vulnerability Assessment and Penetration Testing.",
            "What is the main objective of Cyber Security?",
            "What do you mean by brute force in the context of Cyber Security?",
            "What do you mean by Shoulder Surfing?",
            "What do you mean by Phishing?",
            "Differentiate between hashing and encryption.",
        ],
    },
    QuestionSet {
        role: "Blockchain Developer",
        questions: [
            "What is Blockchain?",
            "What are the different types of Blockchain?",
            "What is a smart contract?",
            "Explain consensus algorithms in Blockchain.",
            "What is Proof of Work?",
            "What is Proof of Stake?",
            "What is a Merkle Tree?",
            "Explain cryptography in Blockchain.",
            "What is a wallet in Blockchain?",
            "What are the challenges in Blockchain implementation?",
            "Explain DApps.",
            "What is Solidity?",
            "Explain gas in Ethereum.",
            "What is a nonce?",
            "Explain mining in Blockchain.",
        ],
    },
    QuestionSet {
        role: "Data Engineer",
        questions: [
            "What is Apache Spark?",
            "What is the difference between Spark and MapReduce?",
            "What is Data Modeling?",
            "What is the difference between a data engineer and a data scientist?",
            "What are the features of Hadoop?",
            "Explain MapReduce in Hadoop.",
            "What is Data Engineering?",
            "Explain the Star Schema in Brief.",
            "Explain the Snowflake Schema in Brief.",
            "What was the algorithm you used in a recent project?",
            "What do you mean by data pipeline?",
            "What is orchestration?",
            "What are different data validation approaches?",
            "Why are you applying for the Data Engineer role in our company?",
            "What challenges did you face in your recent project",
        ],
    },
    QuestionSet {
        role: "Mobile App Developer",
        questions: [
            "What are the features of Android architecture?",
            "List the languages used to build Android.",
            "What is a service in Android?",
            "Differentiate Activities from Services.",
            "What is Google Android SDK? Which are the tools placed in Android SDK?",
            "What is the use of Bundle in Android?",
            "What is an Adapter in Android?",
            "Explain the difference between Implicit and Explicit Intent.",
            "What is ANR in Android? What are the measures you can take to avoid ANR?",
            "Explain different launch modes in Android.",
            "What is the life cycle of Android activity?",
            "Explain Sensors in Android.",
            "Explain the dialog boxes supported on Android.",
            "What is AndroidManifest.xml file and why do you need this?",
            "What is the difference between Serializable and Parcelable? Which is the best approach in Android?",
        ],
    },
    QuestionSet {
        role: "Game Developer",
        questions: [
            "What is the difference between 2D and 3D game development?",
            "Explain the game loop.",
            "What is a sprite?",
            "What is collision detection and how is it implemented?",
            "What is level design?",
            "Explain AI in games.",
            "What is pathfinding?",
            "What are shaders?",
            "How to optimize game performance?",
            "What is Unity and what are its main features?",
            "What is Unreal Engine?",
            "Explain physics in games.",
            "What is animation in games?",
            "What is multiplayer game development challenges?",
            "How to handle input in games?",
        ],
    },
    QuestionSet {
        role: "Product Manager",
        questions: [
            "What is your favorite product and how would you improve it?",
            "How do you prioritize features?",
            "What is the difference between a product manager and a project manager?",
            "How do you define success for a product?",
            "Describe your process for launching a new product.",
            "How do you gather and prioritize customer feedback?",
            "What metrics do you track for product performance?",
            "How do you handle competing priorities from different stakeholders?",
            "What is a MVP and why is it important?",
            "Explain the product lifecycle.",
            "How do you conduct market research?",
            "What is A/B testing and how do you use it?",
            "How do you work with engineering teams?",
            "What is your experience with agile methodologies?",
            "Tell me about a product failure and what you learned.",
        ],
    },
    QuestionSet {
        role: "UI/UX Designer",
        questions: [
            "What is the difference between UI and UX?",
            "Describe your design process.",
            "What tools do you use for prototyping?",
            "How do you conduct user research?",
            "What is wireframing?",
            "Explain user personas.",
            "What is usability testing?",
            "How do you ensure accessibility in designs?",
            "What is responsive design?",
            "Explain information architecture.",
            "What is A/B testing in UX?",
            "How do you handle feedback?",
            "What is the role of color theory in design?",
            "Explain microinteractions.",
            "How do you stay updated with trends?",
        ],
    },
    QuestionSet {
        role: "Digital Marketing Specialist",
        questions: [
            "What is digital marketing?",
            "Explain SEO.",
            "What is PPC?",
            "What is content marketing?",
            "Explain social media marketing.",
            "What is email marketing?",
            "How do you measure ROI?",
            "What is a conversion rate?",
            "Explain A/B testing.",
            "What is Google Analytics?",
            "How do you stay updated with trends?",
            "What is influencer marketing?",
            "Explain inbound marketing.",
            "What is the difference between organic and paid search?",
            "How do you handle a crisis in social media?",
        ],
    },
];
