use std::collections::HashSet;

use super::types::{ArrowSpec, Category, Icon, NodeSpec, Step};
use crate::error::PipelineError;

pub const NODES: &[NodeSpec] = &[
	new_node("Profile", "Profile", Icon::User, 50.0, 30.0, 0.0, Category::Candidate),
	new_node("Dashboard", "Dashboard", Icon::Chart, 50.0, 140.0, 0.1, Category::Candidate),
	new_node("Candidate", "Candidate", Icon::UserCheck, 320.0, 85.0, 0.3, Category::Candidate),
	new_node("Users", "Users", Icon::Users, 600.0, 70.0, 0.2, Category::Process),
	new_node("Upload", "Upload", Icon::Upload, 200.0, 250.0, 0.4, Category::Process),
	new_node("History", "History", Icon::Clock, 420.0, 250.0, 0.4, Category::Process),
	new_node("Parsed Result", "Parsed Result", Icon::Files, 30.0, 400.0, 0.5, Category::Result),
	new_node("AI Insights", "AI Insights", Icon::Brain, 340.0, 400.0, 0.5, Category::Result),
	new_node("Recruiter", "Recruiter", Icon::Users, 900.0, 85.0, 0.6, Category::Recruiter),
	new_node("Candidates", "Candidates", Icon::Users, 700.0, 250.0, 0.7, Category::Recruiter),
	new_node("Bulk Upload", "Bulk Upload", Icon::Upload, 900.0, 250.0, 0.7, Category::Recruiter),
	new_node("Profile-R", "Profile", Icon::User, 1100.0, 250.0, 0.7, Category::Recruiter),
	new_node("Chatbot", "Chatbot", Icon::Message, 700.0, 400.0, 0.8, Category::Result),
	new_node("Bulk Results", "Bulk Results", Icon::Files, 900.0, 400.0, 0.8, Category::Result),
];

pub const ARROWS: &[ArrowSpec] = &[
	new_arrow("Candidate", "Profile", (320.0, 110.0), (190.0, 55.0), 0.3),
	new_arrow("Candidate", "Dashboard", (320.0, 135.0), (190.0, 165.0), 0.3),
	new_arrow("Users", "Candidate", (600.0, 95.0), (460.0, 100.0), 0.3),
	new_arrow("Users", "Recruiter", (740.0, 95.0), (900.0, 100.0), 0.6),
	new_arrow("Candidate", "Upload", (340.0, 135.0), (290.0, 250.0), 0.4),
	new_arrow("Candidate", "History", (420.0, 135.0), (465.0, 250.0), 0.4),
	new_arrow("Upload", "Parsed Result", (250.0, 300.0), (130.0, 400.0), 0.5),
	new_arrow("Upload", "AI Insights", (310.0, 300.0), (385.0, 400.0), 0.5),
	new_arrow("Recruiter", "Candidates", (910.0, 135.0), (760.0, 250.0), 0.7),
	new_arrow("Recruiter", "Bulk Upload", (960.0, 135.0), (960.0, 250.0), 0.7),
	new_arrow("Recruiter", "Profile-R", (1010.0, 135.0), (1150.0, 250.0), 0.7),
	new_arrow("Candidates", "Chatbot", (750.0, 300.0), (750.0, 400.0), 0.8),
	new_arrow("Bulk Upload", "Bulk Results", (960.0, 300.0), (960.0, 400.0), 0.8),
];

/// Direct successors per node, used for hover propagation.
pub const CONNECTIONS: &[(&str, &[&str])] = &[
	("Candidate", &["Profile", "Dashboard", "Upload", "History"]),
	("Users", &["Candidate", "Recruiter"]),
	("Upload", &["AI Insights", "Parsed Result"]),
	("Recruiter", &["Candidates", "Bulk Upload", "Profile-R"]),
	("Candidates", &["Chatbot"]),
	("Bulk Upload", &["Bulk Results"]),
];

pub const STEPS: &[Step] = &[
	Step {
		title: "Step 1: User Entry Point",
		nodes: &["Users"],
		description: "The system starts here. Users can be either candidates looking for jobs or recruiters looking for talent. This module intelligently routes users to their respective workflows.",
	},
	Step {
		title: "Step 2: Candidate Path",
		nodes: &["Users", "Candidate"],
		description: "When a candidate logs in, they access the Candidate module. This is the central hub for all candidate activities including profile management and resume uploads.",
	},
	Step {
		title: "Step 3: Profile & Dashboard",
		nodes: &["Candidate", "Profile", "Dashboard"],
		description: "Candidates can view their Profile (personal information, contact details) and Dashboard (overview of uploaded resumes, application status, and insights).",
	},
	Step {
		title: "Step 4: Resume Upload",
		nodes: &["Candidate", "Upload"],
		description: "Candidates upload their resume files through the Upload module. The system accepts various formats like PDF, DOC, and DOCX for processing.",
	},
	Step {
		title: "Step 5: Resume History",
		nodes: &["Candidate", "History"],
		description: "The History module stores all previously uploaded resumes and their analysis results, allowing candidates to track changes and improvements over time.",
	},
	Step {
		title: "Step 6: AI Processing - Parsing",
		nodes: &["Upload", "Parsed Result"],
		description: "The Parsed Result extracts structured information from the resume including skills, education, work experience, certifications, and contact information using advanced parsing algorithms.",
	},
	Step {
		title: "Step 7: AI Processing - Insights",
		nodes: &["Upload", "AI Insights"],
		description: "AI Insights analyzes the resume content and provides smart recommendations such as skill gaps, resume strengths, formatting suggestions, and career improvement tips.",
	},
	Step {
		title: "Step 8: Recruiter Path",
		nodes: &["Users", "Recruiter"],
		description: "When a recruiter logs in, they access the Recruiter module. This is the command center for talent acquisition and candidate management activities.",
	},
	Step {
		title: "Step 9: Recruiter Profile",
		nodes: &["Recruiter", "Profile-R"],
		description: "Recruiters manage their professional profile including company information, job postings, and preferences for candidate screening.",
	},
	Step {
		title: "Step 10: View Candidates",
		nodes: &["Recruiter", "Candidates"],
		description: "Recruiters can browse, search, and filter through candidate profiles. They can view parsed resumes, AI insights, and make shortlisting decisions.",
	},
	Step {
		title: "Step 11: AI Chatbot Assistant",
		nodes: &["Candidates", "Chatbot"],
		description: "The AI Chatbot helps recruiters with queries like 'Show me top Java developers' or 'Find candidates with 5+ years in ML'. It provides intelligent search and recommendations.",
	},
	Step {
		title: "Step 12: Bulk Upload",
		nodes: &["Recruiter", "Bulk Upload"],
		description: "Recruiters can upload multiple resumes at once (batch processing) to quickly build their candidate database and save time on manual entries.",
	},
	Step {
		title: "Step 13: Bulk Results",
		nodes: &["Bulk Upload", "Bulk Results"],
		description: "All processed resumes from bulk upload are displayed here with parsed information and AI insights, ready for review and candidate shortlisting.",
	},
	Step {
		title: "Complete Pipeline",
		nodes: &[
			"Users",
			"Candidate",
			"Profile",
			"Dashboard",
			"Upload",
			"History",
			"Parsed Result",
			"AI Insights",
			"Recruiter",
			"Profile-R",
			"Candidates",
			"Chatbot",
			"Bulk Upload",
			"Bulk Results",
		],
		description: "This is the complete recruitment pipeline! Candidates upload resumes that get AI-processed, while recruiters efficiently manage and search through talent using intelligent tools. The system streamlines the entire hiring process from application to selection.",
	},
];

const fn new_node(
	id: &'static str,
	title: &'static str,
	icon: Icon,
	x: f64,
	y: f64,
	delay: f64,
	category: Category,
) -> NodeSpec {
	NodeSpec {
		id,
		title,
		icon,
		x,
		y,
		delay,
		category,
	}
}

const fn new_arrow(
	from: &'static str,
	to: &'static str,
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
	delay: f64,
) -> ArrowSpec {
	ArrowSpec {
		from,
		to,
		x1,
		y1,
		x2,
		y2,
		delay,
	}
}

pub fn node(id: &str) -> Option<&'static NodeSpec> {
	NODES.iter().find(|n| n.id == id)
}

pub fn successors(id: &str) -> &'static [&'static str] {
	CONNECTIONS
		.iter()
		.find(|(key, _)| *key == id)
		.map(|(_, next)| *next)
		.unwrap_or(&[])
}

pub fn predecessors(id: &str) -> impl Iterator<Item = &'static str> + '_ {
	CONNECTIONS
		.iter()
		.filter(move |(_, next)| next.iter().any(|n| *n == id))
		.map(|(key, _)| *key)
}

/// Validate the built-in diagram.
pub fn validate() -> Result<(), PipelineError> {
	validate_layout(NODES, ARROWS, CONNECTIONS, STEPS)
}

/// Check that every id referenced by arrows, connections and steps names a node.
pub fn validate_layout(
	nodes: &[NodeSpec],
	arrows: &[ArrowSpec],
	connections: &[(&str, &[&str])],
	steps: &[Step],
) -> Result<(), PipelineError> {
	let mut ids = HashSet::new();
	for n in nodes {
		if !ids.insert(n.id) {
			return Err(PipelineError::DuplicateNode(n.id.into()));
		}
	}
	let check = |id: &str, context: String| {
		if ids.contains(id) {
			Ok(())
		} else {
			Err(PipelineError::UnknownNode {
				id: id.into(),
				context,
			})
		}
	};

	for a in arrows {
		check(a.from, format!("arrow {} -> {}", a.from, a.to))?;
		check(a.to, format!("arrow {} -> {}", a.from, a.to))?;
	}
	for (key, next) in connections {
		check(*key, format!("connections of {key}"))?;
		for n in next.iter() {
			check(*n, format!("connections of {key}"))?;
		}
	}
	if steps.is_empty() {
		return Err(PipelineError::NoSteps);
	}
	for step in steps {
		for n in step.nodes {
			check(*n, format!("step \"{}\"", step.title))?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn static_layout_is_consistent() {
		assert!(validate().is_ok());
		assert_eq!(NODES.len(), 14);
		assert_eq!(ARROWS.len(), 13);
		assert_eq!(STEPS.len(), 14);
	}

	#[test]
	fn every_connection_has_an_arrow() {
		for (from, next) in CONNECTIONS {
			for to in *next {
				assert!(
					ARROWS.iter().any(|a| a.from == *from && a.to == *to),
					"missing arrow {from} -> {to}"
				);
			}
		}
	}

	#[test]
	fn successors_and_predecessors() {
		assert_eq!(successors("Upload"), &["AI Insights", "Parsed Result"]);
		assert!(successors("Chatbot").is_empty());
		assert!(successors("nope").is_empty());

		let preds: Vec<_> = predecessors("Candidate").collect();
		assert_eq!(preds, vec!["Users"]);
		assert_eq!(predecessors("Users").count(), 0);
	}

	#[test]
	fn shared_titles_keep_distinct_ids() {
		let profile = node("Profile").unwrap();
		let recruiter_profile = node("Profile-R").unwrap();
		assert_eq!(profile.title, recruiter_profile.title);
		assert_ne!(profile.category, recruiter_profile.category);
	}

	#[test]
	fn final_step_covers_every_node() {
		let last = STEPS.last().unwrap();
		for n in NODES {
			assert!(last.nodes.contains(&n.id), "{} missing", n.id);
		}
	}

	#[test]
	fn lookup_by_id() {
		assert_eq!(node("Chatbot").map(|n| n.category), Some(Category::Result));
		assert!(node("Nobody").is_none());
	}

	#[test]
	fn duplicate_node_id_is_rejected() {
		let nodes = [NODES[0], NODES[0]];
		assert_eq!(
			validate_layout(&nodes, &[], &[], STEPS),
			Err(PipelineError::DuplicateNode("Profile".into()))
		);
	}

	#[test]
	fn arrow_to_missing_node_is_rejected() {
		let arrows = [new_arrow("Candidate", "Ghost", (0.0, 0.0), (1.0, 1.0), 0.0)];
		assert_eq!(
			validate_layout(NODES, &arrows, &[], STEPS),
			Err(PipelineError::UnknownNode {
				id: "Ghost".into(),
				context: "arrow Candidate -> Ghost".into(),
			})
		);
	}

	#[test]
	fn connection_to_missing_node_is_rejected() {
		let connections: &[(&str, &[&str])] = &[("Users", &["Admins"])];
		assert!(matches!(
			validate_layout(NODES, ARROWS, connections, STEPS),
			Err(PipelineError::UnknownNode { id, .. }) if id == "Admins"
		));
	}

	#[test]
	fn step_with_missing_node_is_rejected() {
		let steps = [Step {
			title: "Broken",
			nodes: &["Users", "Payroll"],
			description: "",
		}];
		assert_eq!(
			validate_layout(NODES, ARROWS, CONNECTIONS, &steps),
			Err(PipelineError::UnknownNode {
				id: "Payroll".into(),
				context: "step \"Broken\"".into(),
			})
		);
	}

	#[test]
	fn empty_step_list_is_rejected() {
		assert_eq!(
			validate_layout(NODES, ARROWS, CONNECTIONS, &[]),
			Err(PipelineError::NoSteps)
		);
	}
}
