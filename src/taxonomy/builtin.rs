//! Builtin topic table for the study wiki.
//!
//! Positions are assigned explicitly rather than re-derived from the
//! labels at scaffold time, so reordering a label never silently
//! reshuffles the sidebar.

use crate::taxonomy::topic::TopicDefinition;

/// One builtin table row.
struct Row {
    slug: &'static str,
    label: &'static str,
    position: u32,
    syllabus: &'static str,
}

const ROWS: &[Row] = &[
    Row {
        slug: "01-java-core",
        label: "1. JAVA CORE",
        position: 1,
        syllabus: "JVM ARCHITECTURE\nCLASS LOADING\nGARBAGE COLLECTION\nCOLLECTIONS FRAMEWORK\nGENERICS & TYPE ERASURE\nEXCEPTIONS\nJAVA MEMORY MODEL",
    },
    Row {
        slug: "02-advanced-java",
        label: "2. ADVANCED JAVA",
        position: 2,
        syllabus: "MULTITHREADING & EXECUTORS\nCOMPLETABLE FUTURE\nSTREAMS & FUNCTIONAL INTERFACES\nREFLECTION\nANNOTATION PROCESSING\nJDBC",
    },
    Row {
        slug: "03-spring-boot",
        label: "3. SPRING BOOT INTERNALS",
        position: 3,
        syllabus: "IOC CONTAINER & BEAN LIFECYCLE\nAUTO CONFIGURATION\nAOP & PROXIES\nSPRING DATA JPA\nTRANSACTIONS\nACTUATOR\nSPRING SECURITY FILTER CHAIN",
    },
    Row {
        slug: "04-operating-systems",
        label: "4. OPERATING SYSTEMS",
        position: 4,
        syllabus: "PROCESSES & THREADS\nCPU SCHEDULING\nMEMORY MANAGEMENT & PAGING\nVIRTUAL MEMORY\nDEADLOCKS\nFILE SYSTEMS\nINTER PROCESS COMMUNICATION",
    },
    Row {
        slug: "05-computer-networks",
        label: "5. COMPUTER NETWORKS",
        position: 5,
        syllabus: "OSI & TCP-IP MODELS\nTCP VS UDP\nHTTP 1.1 / 2 / 3\nTLS HANDSHAKE\nDNS RESOLUTION\nLOAD BALANCING\nCDN",
    },
    Row {
        slug: "06-dbms",
        label: "6. DBMS",
        position: 6,
        syllabus: "RELATIONAL MODEL & NORMALIZATION\nINDEXING (B-TREE, HASH)\nTRANSACTIONS & ACID\nISOLATION LEVELS\nQUERY OPTIMIZATION\nREPLICATION & SHARDING",
    },
    Row {
        slug: "07-sql",
        label: "7. SQL",
        position: 7,
        syllabus: "JOINS\nAGGREGATIONS & GROUP BY\nWINDOW FUNCTIONS\nCOMMON TABLE EXPRESSIONS\nSUBQUERIES\nEXPLAIN PLANS",
    },
    Row {
        slug: "08-nosql-mongodb",
        label: "8. NOSQL & MONGODB",
        position: 8,
        syllabus: "DOCUMENT MODEL\nKEY-VALUE VS COLUMN VS GRAPH\nMONGODB AGGREGATION PIPELINE\nINDEXES IN MONGODB\nCAP TRADE-OFFS\nWHEN NOT TO USE NOSQL",
    },
    Row {
        slug: "09-caching",
        label: "9. CACHING",
        position: 9,
        syllabus: "CACHE STRATEGIES (CACHE-ASIDE, WRITE-THROUGH, WRITE-BEHIND)\nEVICTION POLICIES (LRU, LFU, TTL)\nREDIS DATA STRUCTURES\nCACHE STAMPEDE & THUNDERING HERD\nCONSISTENCY WITH THE SOURCE OF TRUTH",
    },
    Row {
        slug: "10-distributed-systems",
        label: "10. DISTRIBUTED SYSTEMS",
        position: 10,
        syllabus: "CONSISTENCY MODELS\nCONSENSUS (RAFT, PAXOS)\nLEADER ELECTION\nQUORUMS & REPLICATION\nVECTOR CLOCKS\nDISTRIBUTED TRANSACTIONS & SAGAS\nFAILURE DETECTION",
    },
    Row {
        slug: "11-message-queues-kafka",
        label: "11. MESSAGE QUEUES & KAFKA",
        position: 11,
        syllabus: "BROKER ARCHITECTURE\nPARTITIONS & CONSUMER GROUPS\nDELIVERY SEMANTICS (AT-LEAST-ONCE, EXACTLY-ONCE)\nOFFSET MANAGEMENT\nBACKPRESSURE\nDEAD LETTER QUEUES",
    },
    Row {
        slug: "12-microservices",
        label: "12. MICROSERVICES",
        position: 12,
        syllabus: "SERVICE DECOMPOSITION\nAPI GATEWAY\nSERVICE DISCOVERY\nCIRCUIT BREAKERS & RETRIES\nDISTRIBUTED TRACING\nEVENT-DRIVEN COMMUNICATION",
    },
    Row {
        slug: "13-docker-kubernetes",
        label: "13. DOCKER & KUBERNETES",
        position: 13,
        syllabus: "IMAGES, LAYERS & REGISTRIES\nCONTAINER NETWORKING\nPODS, DEPLOYMENTS & SERVICES\nCONFIGMAPS & SECRETS\nAUTOSCALING\nROLLING UPDATES",
    },
    Row {
        slug: "14-aws-cloud",
        label: "14. AWS CLOUD",
        position: 14,
        syllabus: "EC2 & AUTO SCALING GROUPS\nS3 & STORAGE CLASSES\nVPC FUNDAMENTALS\nIAM POLICIES\nLAMBDA & SERVERLESS\nRDS & DYNAMODB\nSQS / SNS",
    },
    Row {
        slug: "15-security-auth",
        label: "15. SECURITY & AUTH",
        position: 15,
        syllabus: "HASHING & SALTING\nSYMMETRIC VS ASYMMETRIC CRYPTO\nJWT & SESSION AUTH\nOAUTH2 & OIDC FLOWS\nOWASP TOP 10\nRATE LIMITING",
    },
    Row {
        slug: "system-design-part-a",
        label: "SYSTEM DESIGN - PART A",
        position: 16,
        syllabus: "SCALABILITY BASICS\nVERTICAL VS HORIZONTAL SCALING\nLOAD BALANCERS\nDATABASE SCALING & READ REPLICAS\nCAP THEOREM\nBACK-OF-THE-ENVELOPE ESTIMATION",
    },
    Row {
        slug: "system-design-part-b",
        label: "SYSTEM DESIGN - PART B",
        position: 17,
        syllabus: "DESIGN A URL SHORTENER\nDESIGN A RATE LIMITER\nDESIGN A NEWS FEED\nDESIGN A CHAT SYSTEM\nDESIGN A NOTIFICATION SERVICE\nDESIGN DISTRIBUTED FILE STORAGE",
    },
];

/// The compiled-in taxonomy, in sidebar order.
#[must_use]
pub fn topics() -> Vec<TopicDefinition> {
    ROWS.iter()
        .map(|row| TopicDefinition {
            slug: row.slug.to_string(),
            label: row.label.to_string(),
            position: Some(row.position),
            syllabus: row.syllabus.to_string(),
        })
        .collect()
}
