//! Error types for diagram setup.

use thiserror::Error;

/// Failures that stop the diagram from being drawn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
	/// A layout entry names a node id that does not exist
	#[error("Unknown node \"{id}\" referenced by {context}")]
	UnknownNode {
		/// The missing node id
		id: String,
		/// Where the reference was found
		context: String,
	},

	/// Two nodes share an id
	#[error("Duplicate node id \"{0}\"")]
	DuplicateNode(String),

	/// The walkthrough has nothing to show
	#[error("Presentation has no steps")]
	NoSteps,

	/// A browser API needed for drawing was unavailable
	#[error("Canvas setup failed: {0}")]
	Canvas(String),
}

/// Result type alias for diagram operations
pub type Result<T> = std::result::Result<T, PipelineError>;
