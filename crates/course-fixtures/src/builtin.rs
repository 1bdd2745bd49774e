//! Builtin fixture content.

use crate::definition::{
    CourseDefinition, CourseLevelSeed, InstructorDefinition, LectureDefinition,
};

pub(crate) const INSTRUCTOR: InstructorDefinition = InstructorDefinition::new(
    "Saroj Kumar",
    "saroj@gmail.com",
    "saroj",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
);

const fn lecture(title: &'static str, is_preview_free: bool) -> LectureDefinition {
    LectureDefinition::new(title, is_preview_free)
}

pub(crate) const COURSES: &[CourseDefinition] = &[
    CourseDefinition {
        title: "Complete Python Programming Course",
        subtitle: "Master Python from basics to advanced concepts",
        description: "Learn Python programming from scratch with hands-on projects. This comprehensive course covers variables, data types, control structures, functions, OOP, and more. Perfect for beginners and intermediate developers.",
        category: "Programming",
        level: CourseLevelSeed::Beginner,
        price_cents: 49_999,
        thumbnail_url: "https://images.unsplash.com/photo-1526379095098-d400fd0bf935?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Introduction to Python", true),
            lecture("Variables and Data Types", true),
            lecture("Control Structures", false),
            lecture("Functions and Modules", false),
            lecture("Object-Oriented Programming", false),
        ],
    },
    CourseDefinition {
        title: "Java Programming Masterclass",
        subtitle: "Complete Java development from beginner to expert",
        description: "Master Java programming with real-world projects. Learn OOP concepts, exception handling, collections, and build enterprise-level applications.",
        category: "Programming",
        level: CourseLevelSeed::Medium,
        price_cents: 59_900,
        thumbnail_url: "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Getting Started with Java", true),
            lecture("Java Syntax and Basics", true),
            lecture("Classes and Objects", false),
            lecture("Inheritance and Polymorphism", false),
            lecture("Exception Handling", false),
        ],
    },
    CourseDefinition {
        title: "Data Structures & Algorithms Complete Course",
        subtitle: "Master problem-solving with DSA",
        description: "Comprehensive course on data structures and algorithms. Learn arrays, linked lists, trees, graphs, sorting, searching, and dynamic programming with coding practice.",
        category: "Computer Science",
        level: CourseLevelSeed::Medium,
        price_cents: 79_999,
        thumbnail_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Introduction to DSA", true),
            lecture("Arrays and Strings", true),
            lecture("Linked Lists", false),
            lecture("Stacks and Queues", false),
            lecture("Trees and Graphs", false),
            lecture("Sorting Algorithms", false),
            lecture("Dynamic Programming", false),
        ],
    },
    CourseDefinition {
        title: "English Communication Mastery",
        subtitle: "Improve your English speaking and writing skills",
        description: "Enhance your English communication skills for personal and professional growth. Learn grammar, vocabulary, speaking techniques, and business English.",
        category: "Language",
        level: CourseLevelSeed::Beginner,
        price_cents: 39_999,
        thumbnail_url: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Basic Grammar Rules", true),
            lecture("Vocabulary Building", true),
            lecture("Speaking Confidently", false),
            lecture("Writing Skills", false),
            lecture("Business English", false),
        ],
    },
    CourseDefinition {
        title: "Modern JavaScript Development",
        subtitle: "Master JavaScript for web development",
        description: "Learn modern JavaScript from basics to advanced concepts. Master ES6+, async programming, DOM manipulation, and build real-world projects.",
        category: "Programming",
        level: CourseLevelSeed::Medium,
        price_cents: 54_999,
        thumbnail_url: "https://images.unsplash.com/photo-1579468118864-1b9ea3c0db4a?w=400&h=300&fit=crop",
        lectures: &[
            lecture("JavaScript Fundamentals", true),
            lecture("DOM Manipulation", true),
            lecture("ES6+ Features", false),
            lecture("Async JavaScript", false),
            lecture("Building Projects", false),
        ],
    },
    CourseDefinition {
        title: "React.js Complete Development Course",
        subtitle: "Build modern web applications with React",
        description: "Master React.js development from beginner to advanced. Learn components, hooks, state management, and build production-ready applications.",
        category: "Web Development",
        level: CourseLevelSeed::Medium,
        price_cents: 29_999,
        thumbnail_url: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=400&h=300&fit=crop",
        lectures: &[
            lecture("React Fundamentals", true),
            lecture("Components and Props", true),
            lecture("State Management", false),
            lecture("React Hooks", false),
            lecture("Building Full Applications", false),
        ],
    },
    CourseDefinition {
        title: "Machine Learning Fundamentals",
        subtitle: "Start your AI journey with ML basics",
        description: "Introduction to machine learning concepts, algorithms, and practical applications. Learn supervised and unsupervised learning with hands-on projects.",
        category: "Data Science",
        level: CourseLevelSeed::Medium,
        price_cents: 89_999,
        thumbnail_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Introduction to ML", true),
            lecture("Supervised Learning", true),
            lecture("Unsupervised Learning", false),
            lecture("Neural Networks", false),
            lecture("Model Evaluation", false),
        ],
    },
    CourseDefinition {
        title: "Complete Digital Marketing Course",
        subtitle: "Master online marketing strategies",
        description: "Comprehensive digital marketing course covering SEO, social media, content marketing, PPC, and analytics. Perfect for business owners and marketers.",
        category: "Marketing",
        level: CourseLevelSeed::Beginner,
        price_cents: 44_999,
        thumbnail_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Digital Marketing Overview", true),
            lecture("SEO Fundamentals", true),
            lecture("Social Media Marketing", false),
            lecture("Content Marketing", false),
            lecture("Analytics and ROI", false),
        ],
    },
    CourseDefinition {
        title: "Node.js Backend Development",
        subtitle: "Build scalable server-side applications",
        description: "Learn Node.js backend development with Express.js, MongoDB, authentication, and API development. Build production-ready server applications.",
        category: "Backend Development",
        level: CourseLevelSeed::Medium,
        price_cents: 64_999,
        thumbnail_url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Node.js Introduction", true),
            lecture("Express.js Framework", true),
            lecture("Database Integration", false),
            lecture("API Development", false),
            lecture("Authentication & Security", false),
        ],
    },
    CourseDefinition {
        title: "Advanced CSS & Web Design",
        subtitle: "Create stunning responsive websites",
        description: "Master CSS and web design principles. Learn responsive design, Flexbox, Grid, animations, and modern CSS techniques to create beautiful websites.",
        category: "Web Design",
        level: CourseLevelSeed::Medium,
        price_cents: 49_999,
        thumbnail_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop",
        lectures: &[
            lecture("CSS Fundamentals", true),
            lecture("Responsive Design", true),
            lecture("Flexbox & Grid", false),
            lecture("Animations & Transitions", false),
            lecture("Modern CSS Techniques", false),
        ],
    },
    CourseDefinition {
        title: "Database Management Systems",
        subtitle: "Master SQL and database design",
        description: "Comprehensive course on database management covering SQL, database design, optimization, and both relational and NoSQL databases.",
        category: "Database",
        level: CourseLevelSeed::Medium,
        price_cents: 59_999,
        thumbnail_url: "https://images.unsplash.com/photo-1544383835-bda2bc66a55d?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Database Fundamentals", true),
            lecture("SQL Basics", true),
            lecture("Advanced SQL Queries", false),
            lecture("Database Design", false),
            lecture("NoSQL Databases", false),
        ],
    },
    CourseDefinition {
        title: "Cybersecurity Fundamentals",
        subtitle: "Learn to protect digital assets",
        description: "Introduction to cybersecurity concepts, network security, encryption, ethical hacking, and security best practices for individuals and organizations.",
        category: "Security",
        level: CourseLevelSeed::Beginner,
        price_cents: 74_999,
        thumbnail_url: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=400&h=300&fit=crop",
        lectures: &[
            lecture("Cybersecurity Introduction", true),
            lecture("Network Security", true),
            lecture("Encryption & Cryptography", false),
            lecture("Ethical Hacking Basics", false),
            lecture("Security Best Practices", false),
        ],
    },
];
