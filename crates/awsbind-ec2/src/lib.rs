//! Async client for the Amazon EC2 2014-10-01 query API.
//!
//! ```no_run
//! use awsbind_core::ClientConfig;
//! use awsbind_ec2::{Ec2Client, input::DescribeInstancesRequest};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Ec2Client::new(&ClientConfig::from_env()?)?;
//! let result = client
//!     .describe_instances(DescribeInstancesRequest::default())
//!     .await?;
//! for reservation in result.reservations {
//!     for instance in reservation.instances {
//!         println!("{:?}", instance.instance_id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod operations;

pub use awsbind_ec2_model::{API_VERSION, Ec2ErrorCode, Ec2Operation, input, output, types};
pub use awsbind_http::{SdkError, ServiceError};
pub use client::{Ec2Client, SERVICE_NAME};
