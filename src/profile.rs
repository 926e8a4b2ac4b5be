pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub about: &'static str,
    pub links: &'static [ContactLink],
    pub experience: &'static [Role],
    pub skills: &'static [SkillGroup],
}

pub struct ContactLink {
    pub kind: LinkKind,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Email,
}

pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static str,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::GitHub => "GitHub",
            LinkKind::LinkedIn => "LinkedIn",
            LinkKind::Email => "Email",
        }
    }
}

pub const PROFILE: Profile = Profile {
    name: "Isha Mishra",
    headline: "Software Development Engineer",
    about: "Software Development Engineer with expertise in full-stack development, cloud computing, \
            and data structures & algorithms. Experienced in developing scalable applications using \
            modern technologies and best practices.",
    links: &[
        ContactLink {
            kind: LinkKind::GitHub,
            href: "https://github.com/ishamishra0408",
        },
        ContactLink {
            kind: LinkKind::LinkedIn,
            href: "https://linkedin.com/in/ishamishracalifornia",
        },
        ContactLink {
            kind: LinkKind::Email,
            href: "mailto:ishamishra0408@gmail.com",
        },
    ],
    experience: &[
        Role {
            title: "Software Development Engineer",
            company: "Cisco Systems",
            period: "2022 - Present",
            highlights: &[
                "Developed and maintained microservices using Java Spring Boot and Node.js",
                "Implemented CI/CD pipelines using Jenkins and Docker",
                "Optimized database queries and improved application performance",
            ],
        },
        Role {
            title: "Software Engineer",
            company: "Accenture",
            period: "2020 - 2022",
            highlights: &[
                "Led development of RESTful APIs using Node.js and Express",
                "Implemented authentication and authorization using JWT",
                "Collaborated with cross-functional teams to deliver high-quality solutions",
            ],
        },
    ],
    skills: &[
        SkillGroup {
            category: "Languages",
            items: "JavaScript, TypeScript, Java, Python",
        },
        SkillGroup {
            category: "Frontend",
            items: "React, Vue.js, HTML5, CSS3",
        },
        SkillGroup {
            category: "Backend",
            items: "Node.js, Spring Boot, Express",
        },
        SkillGroup {
            category: "Databases",
            items: "MongoDB, PostgreSQL, MySQL",
        },
        SkillGroup {
            category: "Cloud",
            items: "AWS, Docker, Kubernetes",
        },
        SkillGroup {
            category: "Tools",
            items: "Git, Jenkins, JIRA",
        },
    ],
};
